//! Error types for mono-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the script synchronization engine
    #[error(transparent)]
    Scripts(#[from] mono_scripts::Error),

    /// Error from mono-fs
    #[error(transparent)]
    Fs(#[from] mono_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Workspace configuration could not be parsed
    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}
