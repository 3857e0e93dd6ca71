//! techsplice CLI
//!
//! Merges the expanded tech tree block from the source file into the
//! application file, either as a reviewable `.new` file or in place.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::JobOverrides;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let mode = cli.command.unwrap_or(Commands::Review).mode();
    let overrides = JobOverrides {
        config: cli.config,
        source: cli.source,
        target: cli.target,
        strategy: cli.strategy,
    };

    let cwd = std::env::current_dir()?;
    commands::run_integrate(&cwd, mode, &overrides, cli.json)
}
