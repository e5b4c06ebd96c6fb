//! Human-readable report output.

mod console;

pub use console::{write_package_report, write_run_summary};
