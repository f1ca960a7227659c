//! Command implementations

mod scripts;

pub use scripts::{run_check, run_update};
