//! Package manager selection
//!
//! The active package manager decides which launcher scripts a workspace
//! carries. Resolution itself (reading the workspace configuration) happens
//! in the caller; this module only names the supported managers.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Package managers supported by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Get the string representation of the package manager.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            other => Err(Error::UnknownPackageManager {
                name: other.to_string(),
            }),
        }
    }
}
