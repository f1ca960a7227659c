//! Built-in launcher script descriptors - SINGLE SOURCE OF TRUTH
//!
//! This module defines, in one place, which launcher scripts each package
//! manager mode carries and the explanatory header lines written into each
//! generated file. Script selection everywhere else derives from
//! [`standard_descriptors`].

use crate::descriptor::ScriptDescriptor;
use crate::package_manager::PackageManager;

/// Returns the launcher script descriptors for a package manager mode.
///
/// Every mode carries the generic bootstrap launcher plus the two
/// orchestrator launchers; pnpm workspaces additionally carry a launcher
/// that routes through pnpm's lockfile-aware invocation.
pub fn standard_descriptors(package_manager: PackageManager) -> Vec<ScriptDescriptor> {
    let mut descriptors = vec![
        ScriptDescriptor::new(
            "install-run.js",
            [
                "// This script is intended for automated build environments where a Node tool may",
                "// not be preinstalled or may be present at an unpredictable version. It installs",
                "// the requested version of the requested package (when not already cached) and",
                "// then forwards the remaining command line to it. Example:",
                "//",
                "//   node common/scripts/install-run.js qty@1.13.0 qty \"1 meter in cm\"",
            ],
        ),
        ScriptDescriptor::new(
            "install-run-mono.js",
            [
                "// This script installs the version of mono pinned by this repository and then",
                "// invokes it, so build agents never need a globally installed copy. Example:",
                "//",
                "//   node common/scripts/install-run-mono.js install",
            ],
        ),
        ScriptDescriptor::new(
            "install-run-monox.js",
            [
                "// This script installs the version of mono pinned by this repository and then",
                "// invokes its script runner, monox. Example:",
                "//",
                "//   node common/scripts/install-run-monox.js custom-command",
            ],
        ),
    ];

    if package_manager == PackageManager::Pnpm {
        descriptors.push(ScriptDescriptor::new(
            "install-run-mono-pnpm.js",
            [
                "// This script routes a pnpm invocation through the repository-pinned version of",
                "// mono so that pnpm runs under the workspace's lockfile settings. Example:",
                "//",
                "//   node common/scripts/install-run-mono-pnpm.js pnpm-command",
            ],
        ));
    }

    descriptors
}
