use anyhow::Result;
use clap::Parser;
use recipe_stats_cli::{init_tracing, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    run(&cli)?;
    Ok(())
}
