//! Generated launcher-script synchronization engine
//!
//! A monorepo managed by mono carries a small set of auto-generated,
//! version-pinned launcher scripts inside its shared `common/scripts`
//! folder. This crate keeps those files consistent with the canonical
//! templates bundled with the tool:
//!
//! - **Validate mode**: enforcing, read-only; fails hard when any target is
//!   stale or missing. Used before installation.
//! - **Repair mode**: rewrites stale or missing targets; idempotent and
//!   safe to re-run. Used during update.
//!
//! Equality is judged under a normalization rule that absorbs line-ending
//! and trailing-whitespace drift introduced by version-control checkout
//! settings. Per-file work runs concurrently with a fixed fan-out bound.

pub mod builtins;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod header;
pub mod normalize;
pub mod package_manager;
pub mod store;

pub use builtins::standard_descriptors;
pub use descriptor::ScriptDescriptor;
pub use engine::{MAX_IN_FLIGHT, ScriptSyncer, SyncMode};
pub use error::{Error, Result};
pub use header::{BANNER_LINES, FOOTER_LINES, expected_content};
pub use normalize::normalize;
pub use package_manager::PackageManager;
pub use store::TemplateStore;
