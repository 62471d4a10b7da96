//! Report writer - renders a simulation result as a text report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::config::REPORT_FILE_SUFFIX;
use crate::common::{FrameCapacity, Result};
use crate::simulation::SimulationResult;

/// Write the report for one policy run to `out`.
///
/// # Layout
/// ```text
/// FIFO Page Replacement Algorithm
/// Frame Size: 3
/// Page Faults: 4
///
/// Frame State History:
/// Step 1: [1, -, -]
/// Step 2: [1, 2, -]
/// ...
/// ```
/// Steps are numbered from 1. The result is only read.
pub fn write_report<W: Write>(
    out: &mut W,
    label: &str,
    capacity: FrameCapacity,
    result: &SimulationResult,
) -> Result<()> {
    writeln!(out, "{} Page Replacement Algorithm", label)?;
    writeln!(out, "Frame Size: {}", capacity)?;
    writeln!(out, "Page Faults: {}", result.fault_count())?;
    writeln!(out)?;
    writeln!(out, "Frame State History:")?;
    for (i, snapshot) in result.history().enumerate() {
        writeln!(out, "Step {}: {}", i + 1, snapshot)?;
    }
    Ok(())
}

/// Render the report into a `String`.
pub fn render_report(label: &str, capacity: FrameCapacity, result: &SimulationResult) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, label, capacity, result).expect("writing into a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// File name of the report for `label`, e.g. `fifo_results.txt`.
pub fn report_file_name(label: &str) -> String {
    format!("{}{}", label.to_lowercase(), REPORT_FILE_SUFFIX)
}

/// Write the report for `label` into `dir`, replacing any previous one.
///
/// Returns the path written.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be created or written.
pub fn write_report_file<P: AsRef<Path>>(
    dir: P,
    label: &str,
    capacity: FrameCapacity,
    result: &SimulationResult,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(report_file_name(label));
    let mut out = BufWriter::new(File::create(&path)?);
    write_report(&mut out, label, capacity, result)?;
    out.flush()?;
    Ok(path)
}
