use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "discmatch")]
#[command(author, version, about = "Match a disc rip against catalog release listings")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score candidate releases against a local disc and pick one
    Match {
        /// Local disc spec (JSON)
        #[arg(short, long, required = true)]
        local: PathBuf,

        /// Candidate batch (JSON array)
        #[arg(long, required = true)]
        candidates: PathBuf,

        /// BDInfo summary to take subtitle languages from
        #[arg(long)]
        bd_summary: Option<PathBuf>,

        /// Decide without prompting, using the configured thresholds
        #[arg(long)]
        unattended: bool,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a release detail text and display the specification
    Parse {
        /// Detail text or HTML file
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a results file written by an earlier match run
    Show {
        /// Results file (JSON)
        #[arg(required = true)]
        file: PathBuf,

        /// Also print each candidate's decision log
        #[arg(long)]
        logs: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
