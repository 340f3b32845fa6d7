
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{analyze, plot};
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Analyze(args) => analyze::run(&cli, args),
        Commands::Plot(args) => plot::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
