//! CLI command handlers.

mod scan;

pub use scan::run_scan;
