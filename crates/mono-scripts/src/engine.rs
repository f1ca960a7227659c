//! ScriptSyncer - check and repair of generated launcher scripts
//!
//! The syncer compares each target file inside the common scripts folder
//! against its expected content (banner + header lines + footer + canonical
//! body) under the normalization rule, and either reports drift or rewrites
//! the stale file depending on the selected mode.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use futures::stream::{self, TryStreamExt};
use tracing::{debug, info};

use crate::descriptor::ScriptDescriptor;
use crate::error::{Error, Result};
use crate::header::expected_content;
use crate::normalize::normalize;
use crate::store::TemplateStore;

/// Upper bound on reconcile operations in flight at once.
///
/// Keeps file-descriptor usage bounded on workspaces with many scripts and
/// slow I/O while still overlapping read/write latency across files. Fixed
/// policy, not configurable per descriptor list.
pub const MAX_IN_FLIGHT: usize = 10;

/// Synchronization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Enforcing, read-only check: fail on any stale or missing file.
    Validate,
    /// Self-healing check: rewrite any stale or missing file.
    Repair,
}

/// Engine that keeps generated launcher scripts consistent with their
/// bundled canonical templates.
pub struct ScriptSyncer {
    store: TemplateStore,
    scripts_dir: PathBuf,
}

impl ScriptSyncer {
    /// Create a syncer over a template store and a common scripts folder.
    pub fn new(store: TemplateStore, scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            scripts_dir: scripts_dir.into(),
        }
    }

    /// The common scripts folder this syncer manages.
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Check every descriptor's target file and, in repair mode, rewrite
    /// the stale or missing ones.
    ///
    /// The scripts folder is created (with parents) before any per-file
    /// work starts, in both modes. Per-file reconciles run concurrently,
    /// at most [`MAX_IN_FLIGHT`] in flight; the first failure aborts the
    /// run.
    ///
    /// # Returns
    /// - `Ok(true)` if any file was rewritten (repair mode)
    /// - `Ok(false)` if every file was already current
    /// - `Err(Error::ScriptOutOfDate)` on drift in validate mode
    /// - `Err(_)` on any filesystem or template failure
    pub async fn ensure_up_to_date(
        &self,
        descriptors: &[ScriptDescriptor],
        mode: SyncMode,
    ) -> Result<bool> {
        let mut seen = HashSet::new();
        for descriptor in descriptors {
            if !seen.insert(descriptor.name.as_str()) {
                return Err(Error::DuplicateScript {
                    name: descriptor.name.clone(),
                });
            }
        }

        // Barrier: the folder must exist before any per-file read or write.
        mono_fs::io::ensure_dir(&self.scripts_dir).await?;

        let changed = AtomicBool::new(false);
        let changed_ref = &changed;

        stream::iter(descriptors.iter().map(Ok::<_, Error>))
            .try_for_each_concurrent(MAX_IN_FLIGHT, |descriptor| async move {
                if self.reconcile(descriptor, mode).await? {
                    changed_ref.fetch_or(true, Ordering::Relaxed);
                }
                Ok(())
            })
            .await?;

        Ok(changed.load(Ordering::Relaxed))
    }

    /// Check one target file and, in repair mode, rewrite it if stale.
    ///
    /// Expected content is computed lazily and at most once per call: only
    /// when a target exists (for the comparison) or when a write turns out
    /// to be necessary.
    async fn reconcile(&self, descriptor: &ScriptDescriptor, mode: SyncMode) -> Result<bool> {
        let target = self.scripts_dir.join(&descriptor.name);

        let current = mono_fs::io::read_text_optional(&target)
            .await?
            .map(|raw| normalize(&raw));

        let mut expected: Option<String> = None;

        if let Some(actual) = current.as_deref() {
            let want = expected.insert(self.render_expected(descriptor).await?);
            if want.as_str() == actual {
                debug!(script = %descriptor.name, "already up to date");
                return Ok(false);
            }
        }

        match mode {
            SyncMode::Validate => Err(Error::ScriptOutOfDate { path: target }),
            SyncMode::Repair => {
                let content = match expected {
                    Some(content) => content,
                    None => self.render_expected(descriptor).await?,
                };
                mono_fs::io::write_text(&target, &content).await?;
                info!("{} was out of date and has been rewritten", target.display());
                Ok(true)
            }
        }
    }

    /// Load the canonical body and render the normalized expected content.
    async fn render_expected(&self, descriptor: &ScriptDescriptor) -> Result<String> {
        let body = self.store.load(&descriptor.name).await?;
        Ok(expected_content(descriptor, &body))
    }
}
