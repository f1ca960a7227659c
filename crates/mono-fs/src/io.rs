//! Asynchronous text I/O with atomic replacement

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::{Error, Result};

/// Read text content from a file.
pub async fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Read text content from a file that may not exist.
///
/// A missing file is not an error: it yields `Ok(None)`. Every other
/// failure (permissions, the path being a directory, hardware trouble)
/// surfaces as an [`Error::Io`] carrying the path.
pub async fn read_text_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Create a directory and all of its parents if absent.
///
/// Succeeds if the directory already exists. Fails with [`Error::Io`] if
/// the path (or one of its ancestors) exists as a regular file.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename so a reader never observes a partial
/// file. The temp file lives in the target's directory to guarantee the
/// rename stays on one filesystem.
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = fs::File::create(&temp_path)
        .await
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .write_all(content)
        .await
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .await
        .map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub async fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes()).await
}
