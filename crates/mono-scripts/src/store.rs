//! Bundled template store
//!
//! Canonical script bodies ship with the tool in a fixed directory; the
//! store reads them by script name. It never writes.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Read-only store of canonical script bodies.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the canonical body for a script name.
    ///
    /// A missing template means the tool installation itself is broken
    /// and maps to [`Error::TemplateMissing`]; any other read failure
    /// propagates as a filesystem error.
    pub async fn load(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        match mono_fs::io::read_text_optional(&path).await? {
            Some(body) => Ok(body),
            None => Err(Error::TemplateMissing {
                name: name.to_string(),
                path,
            }),
        }
    }
}
