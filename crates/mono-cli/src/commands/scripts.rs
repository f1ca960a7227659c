//! Update and check command implementations
//!
//! Both commands resolve the workspace's package manager, select the
//! built-in descriptor list, and run the script synchronization engine
//! against common/scripts - update in repair mode, check in enforcing
//! validate mode.

use std::env;
use std::path::{Path, PathBuf};

use colored::Colorize;

use mono_scripts::{ScriptSyncer, SyncMode, TemplateStore, standard_descriptors};

use crate::config::{self, WorkspaceConfig};
use crate::error::Result;

/// Environment override for the bundled template directory.
pub const TEMPLATES_ENV: &str = "MONO_TEMPLATES_DIR";

/// Locate the bundled template directory.
///
/// Templates ship in `assets/scripts` alongside the installed executable;
/// `MONO_TEMPLATES_DIR` overrides the location (used by tests and by
/// package maintainers who relocate assets).
fn template_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(TEMPLATES_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe()?;
    let install_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(install_dir.join("assets").join("scripts"))
}

fn build_syncer(root: &Path) -> Result<ScriptSyncer> {
    let store = TemplateStore::new(template_dir()?);
    Ok(ScriptSyncer::new(store, config::scripts_dir(root)))
}

/// Run the update command
///
/// Repairs any stale or missing generated scripts. Prints a single blank
/// separator line after the run when anything was rewritten.
pub async fn run_update(root: &Path) -> Result<()> {
    let workspace = WorkspaceConfig::load(root)?;
    let descriptors = standard_descriptors(workspace.package_manager);
    let syncer = build_syncer(root)?;

    let changed = syncer
        .ensure_up_to_date(&descriptors, SyncMode::Repair)
        .await?;

    if changed {
        println!();
    }
    println!(
        "{} Generated scripts are up to date ({} workspace).",
        "OK".green().bold(),
        workspace.package_manager
    );
    Ok(())
}

/// Run the check command
///
/// Validates the generated scripts without modifying anything; any drift
/// aborts the command with a fatal error.
pub async fn run_check(root: &Path) -> Result<()> {
    let workspace = WorkspaceConfig::load(root)?;
    let descriptors = standard_descriptors(workspace.package_manager);
    let syncer = build_syncer(root)?;

    syncer
        .ensure_up_to_date(&descriptors, SyncMode::Validate)
        .await?;

    println!(
        "{} Generated scripts match the bundled templates.",
        "OK".green().bold()
    );
    Ok(())
}
