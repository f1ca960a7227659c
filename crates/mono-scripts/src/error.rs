//! Error types for mono-scripts

use std::path::PathBuf;

/// Result type for mono-scripts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing generated scripts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A target file is stale or missing while running in enforcing mode
    #[error(
        "The generated file {path} is out of date or missing. \
         Run \"mono update\" and commit the rewritten files."
    )]
    ScriptOutOfDate { path: PathBuf },

    /// The bundled template for a script name cannot be found
    ///
    /// This indicates a defective tool installation, not drift in the
    /// user's repository.
    #[error("The bundled template for \"{name}\" was not found at {path}")]
    TemplateMissing { name: String, path: PathBuf },

    /// The same script name appears more than once in a descriptor list
    #[error("Duplicate script name in descriptor list: \"{name}\"")]
    DuplicateScript { name: String },

    /// Unrecognized package manager name in configuration
    #[error("Unknown package manager \"{name}\" (expected npm, pnpm, or yarn)")]
    UnknownPackageManager { name: String },

    /// Filesystem error from mono-fs
    #[error(transparent)]
    Fs(#[from] mono_fs::Error),
}
