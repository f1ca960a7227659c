//! Filesystem primitives for the mono build orchestrator
//!
//! Provides path-carrying I/O errors and safe asynchronous text
//! operations: missing-tolerant reads, atomic full-file replacement, and
//! recursive directory creation.

pub mod error;
pub mod io;

pub use error::{Error, Result};
