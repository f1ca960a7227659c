//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// mono - monorepo build orchestrator
#[derive(Parser, Debug)]
#[command(name = "mono")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Bring the workspace up to date
    ///
    /// Rewrites any stale or missing generated launcher scripts under
    /// common/scripts. Rewritten files should be committed.
    Update,

    /// Verify the workspace before installation
    ///
    /// Fails if any generated launcher script under common/scripts is
    /// stale or missing. Never modifies the workspace.
    Check,
}
