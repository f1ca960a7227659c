//! Workspace configuration
//!
//! The workspace declares its active package manager in
//! `.mono/config.toml`; everything else about script synchronization is
//! fixed policy. A missing config file means an npm workspace.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mono_scripts::PackageManager;

use crate::error::{CliError, Result};

/// Configuration directory inside a workspace root.
pub const CONFIG_DIR: &str = ".mono";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Folder of generated launcher scripts, relative to the workspace root.
pub const COMMON_SCRIPTS_DIR: &str = "common/scripts";

fn default_package_manager() -> String {
    "npm".to_string()
}

/// Workspace settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSection {
    /// Active package manager: "npm", "pnpm", or "yarn"
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
}

impl Default for WorkspaceSection {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
        }
    }
}

/// Workspace configuration manifest parsed from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Workspace settings
    #[serde(default)]
    pub workspace: WorkspaceSection,
}

/// Resolved workspace configuration
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// The active package manager
    pub package_manager: PackageManager,
}

impl WorkspaceConfig {
    /// Load the configuration for a workspace root.
    ///
    /// A missing config file yields the npm default. A present but
    /// unparsable file, or an unknown package manager name, is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self {
                package_manager: PackageManager::Npm,
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| CliError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let package_manager = manifest.workspace.package_manager.parse()?;
        Ok(Self { package_manager })
    }
}

/// The common scripts folder for a workspace root.
pub fn scripts_dir(root: &Path) -> PathBuf {
    root.join(COMMON_SCRIPTS_DIR)
}
