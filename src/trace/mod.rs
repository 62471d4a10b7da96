//! Trace I/O around the simulation core.
//!
//! - [`TraceLoader`] - Delimited text to an access sequence
//! - [`write_report`] - Simulation result to a text report

mod loader;
mod report;

pub use loader::{load_sequence, parse_sequence, TraceLoader};
pub use report::{render_report, report_file_name, write_report, write_report_file};
