//! Error types for mono-fs

use std::path::PathBuf;

/// Result type for mono-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mono-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
