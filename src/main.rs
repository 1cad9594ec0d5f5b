//! CLI entry point for the chaos game fractal generator

use chaosgame::io::cli::{Cli, FractalRunner};
use clap::Parser;

fn main() -> chaosgame::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = FractalRunner::new(cli);
    runner.process()?;
    Ok(())
}
