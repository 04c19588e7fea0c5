pub mod seed;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command line configuration for the rope demo.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about,
    long_about = "Breakable rope demo: a hooked chain of links that snaps while an actor hangs on it."
)]
pub struct AppArgs {
    /// Scene TOML (hook, rope, style). Falls back to `ROPE_CONFIG`, then `./rope.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed override for link variant picks.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Hide the main window (offscreen/headless).
    #[arg(long, default_value_t = false)]
    pub headless: bool,
    /// Segment a scripted actor grabs at startup.
    #[arg(long, value_name = "SEGMENT")]
    pub hang_at: Option<usize>,
    /// Draw the rest line and pending break points.
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub debug_gizmos: bool,
}
