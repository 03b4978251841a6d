//! CLI entry point for the pentomino rectangle solver

use clap::Parser;
use pentotile::io::cli::{Cli, SolveRunner};
use tracing_subscriber::EnvFilter;

fn main() -> pentotile::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut runner = SolveRunner::new(cli);
    runner.process()
}
