//! mono CLI
//!
//! The command-line interface for the mono build orchestrator. The commands
//! implemented here manage the generated launcher scripts under
//! common/scripts: `update` repairs them, `check` enforces them.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Update) => {
            let cwd = std::env::current_dir()?;
            commands::run_update(&cwd).await
        }
        Some(Commands::Check) => {
            let cwd = std::env::current_dir()?;
            commands::run_check(&cwd).await
        }
        None => {
            println!("{} monorepo build orchestrator", "mono".green().bold());
            println!();
            println!("Run {} for available commands.", "mono --help".cyan());
            Ok(())
        }
    }
}
