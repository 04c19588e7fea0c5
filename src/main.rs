use breakable_rope::cli::AppArgs;
use breakable_rope::run_app;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    run_app(AppArgs::parse())
}
