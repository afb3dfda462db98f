mod cli;

use discmatch::{config, local, matcher, results, selection::TerminalPrompter};
use discmatch_parser::{extract_cover_images, parse_release_details};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise derive the filter from the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "discmatch=trace,discmatch_parser=debug,discmatch_common=debug".to_string()
        } else {
            "discmatch=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Match {
            local,
            candidates,
            bd_summary,
            unattended,
            json,
        } => run_match(
            cli.config.as_deref(),
            &local,
            &candidates,
            bd_summary.as_deref(),
            unattended,
            json,
        ),
        Commands::Parse { file, json } => parse_file(&file, json),
        Commands::Show { file, logs } => show_results(&file, logs),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("discmatch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_match(
    config_path: Option<&Path>,
    local_path: &Path,
    candidates_path: &Path,
    bd_summary: Option<&Path>,
    unattended: bool,
    json: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if unattended {
        config.matching.unattended = true;
    }

    let mut local = local::load_local_spec(local_path)
        .with_context(|| format!("Failed to load local disc spec: {:?}", local_path))?;
    if let Some(path) = bd_summary {
        let summary = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read BD summary: {:?}", path))?;
        local = local::apply_bd_summary(local, &summary);
    }

    let batch = matcher::load_batch(candidates_path)
        .with_context(|| format!("Failed to load candidates: {:?}", candidates_path))?;

    let mut prompter = TerminalPrompter::stdio();
    let outcome = matcher::Matcher::new(config).run(&local, batch, &mut prompter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("\nCandidates: {}", outcome.scored.len());
    for (i, scored) in outcome.scored.iter().enumerate() {
        println!(
            "  [{}] {:>6.1}  {}",
            i + 1,
            scored.score,
            scored.candidate.label()
        );
    }

    match outcome.selection {
        Some(selection) => {
            println!("\nSelected release:");
            println!(
                "  Region: {}",
                selection.region_code.as_deref().unwrap_or("unknown")
            );
            println!(
                "  Distributor: {}",
                selection.distributor_name.as_deref().unwrap_or("unknown")
            );
            if let Some(ref url) = selection.release_url {
                println!("  URL: {}", url);
            }
            if let Some(ref covers) = selection.cover_images {
                for (kind, url) in covers {
                    println!("  Cover ({}): {}", kind, url);
                }
            }
        }
        None => println!("\nNo release selected."),
    }

    Ok(())
}

fn parse_file(file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read detail file: {:?}", file))?;
    let spec = parse_release_details(&text);
    let covers = extract_cover_images(&text);

    if json {
        let value = serde_json::json!({ "spec": spec, "covers": covers });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let Some(spec) = spec else {
        println!("No specifications found.");
        return Ok(());
    };

    println!(
        "Video: {} / {}",
        spec.video.codec.as_deref().unwrap_or("-"),
        spec.video.resolution.as_deref().unwrap_or("-")
    );

    println!("\nAudio Tracks: {}", spec.audio.len());
    for (i, track) in spec.audio.iter().enumerate() {
        println!("  [{}] {}", i, track);
    }

    println!("\nSubtitles: {}", spec.subtitles.len());
    if !spec.subtitles.is_empty() {
        println!("  {}", spec.subtitles.join(", "));
    }

    println!(
        "\nDiscs: {} x{} ({})",
        spec.discs.disc_type.as_deref().unwrap_or("-"),
        spec.discs.count.unwrap_or(0),
        spec.discs.format.as_deref().unwrap_or("-")
    );

    if let Some(ref region) = spec.playback.region {
        print!("Region: {}", region);
        if let Some(ref notes) = spec.playback.region_notes {
            print!(" ({})", notes);
        }
        println!();
    }

    if !covers.is_empty() {
        println!("\nCovers:");
        for (kind, url) in &covers {
            println!("  {}: {}", kind, url);
        }
    }

    Ok(())
}

fn show_results(file: &Path, logs: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let run = results::load_results(file)
        .with_context(|| format!("Failed to read results file: {:?}", file))?;

    println!("Title: {}", run.local.title);
    println!("Generated: {}", run.generated_at.to_rfc3339());
    println!("\nCandidates: {}", run.scored.len());
    for (i, scored) in run.scored.iter().enumerate() {
        println!(
            "  [{}] {:>6.1}  {}",
            i + 1,
            scored.score,
            scored.candidate.label()
        );
        if logs {
            for line in &scored.decision_log {
                println!("        {}", line);
            }
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!(
        "  Thresholds: single > {}, multi > {}",
        config.matching.single_threshold, config.matching.multi_threshold
    );
    println!(
        "  Unattended: {} (confirm: {})",
        config.matching.unattended, config.matching.unattended_confirm
    );
    println!(
        "  Covers: extract {}, download {}",
        config.covers.extract, config.covers.download
    );
    match config.output.results_dir() {
        Some(dir) => println!("  Results dir: {}", dir.display()),
        None => println!("  Results dir: disabled"),
    }

    Ok(())
}
