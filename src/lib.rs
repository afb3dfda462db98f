//! discmatch - match a probed disc rip against catalog release listings.
//!
//! The library is organised the way a run flows:
//!
//! - [`local`]: load the local disc spec
//! - [`matcher`]: parse candidate details, score, persist and select
//! - [`scoring`]: per-candidate scoring rules and the decision log
//! - [`selection`]: the selection state machine and the prompt protocol
//! - [`results`]: the per-run results file
//! - [`covers`]: hand-off of the accepted release's cover images

pub mod config;
pub mod covers;
pub mod local;
pub mod matcher;
pub mod results;
pub mod scoring;
pub mod selection;
