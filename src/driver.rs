//! End-to-end driver: load one trace, run each policy, write the reports.

use std::path::PathBuf;

use crate::common::config::{DEFAULT_FRAME_CAPACITY, DEFAULT_INPUT_FILE};
use crate::common::{FrameCapacity, PageId, Result};
use crate::simulation::{Policy, SimulationResult};
use crate::trace::{write_report_file, TraceLoader};

/// Everything one driver invocation needs.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub input: PathBuf,
    /// Raw frame count, validated before anything else happens.
    pub capacity: usize,
    pub out_dir: PathBuf,
    pub policies: Vec<Policy>,
    pub loader: TraceLoader,
    /// When false, no report files are written.
    pub write_reports: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            capacity: DEFAULT_FRAME_CAPACITY,
            out_dir: PathBuf::from("."),
            policies: Policy::ALL.to_vec(),
            loader: TraceLoader::new(),
            write_reports: true,
        }
    }
}

/// One policy's result plus where its report went.
#[derive(Debug, Clone)]
pub struct PolicyRun {
    pub policy: Policy,
    pub result: SimulationResult,
    pub report: Option<PathBuf>,
}

/// The outcome of a whole driver invocation.
#[derive(Debug, Clone)]
pub struct DriverOutput {
    pub pages: Vec<PageId>,
    pub capacity: FrameCapacity,
    pub runs: Vec<PolicyRun>,
}

impl DriverOutput {
    /// One `LABEL - Page Faults: N` line per policy, labels padded to the
    /// same width.
    pub fn summary_lines(&self) -> Vec<String> {
        let width = self
            .runs
            .iter()
            .map(|run| run.policy.label().len())
            .max()
            .unwrap_or(0);

        self.runs
            .iter()
            .map(|run| {
                format!(
                    "{:<width$} - Page Faults: {}",
                    run.policy.label(),
                    run.result.fault_count(),
                    width = width
                )
            })
            .collect()
    }

    /// One `LABEL: Stats { .. }` line per policy.
    pub fn stats_lines(&self) -> Vec<String> {
        self.runs
            .iter()
            .map(|run| format!("{}: {}", run.policy, run.result.stats()))
            .collect()
    }
}

/// Run every configured policy over the configured trace.
///
/// The capacity is validated and the whole trace loaded before any policy
/// runs, and every policy runs before any report is written, so a
/// configuration or input error never leaves a partial set of reports.
///
/// # Errors
/// `Error::InvalidConfiguration` for a zero capacity, `Error::MalformedInput`
/// or `Error::Io` from the loader, `Error::Io` from the report writer.
pub fn run(config: &DriverConfig) -> Result<DriverOutput> {
    let capacity = FrameCapacity::new(config.capacity)?;
    let pages = config.loader.load(&config.input)?;

    let mut runs: Vec<PolicyRun> = config
        .policies
        .iter()
        .map(|&policy| PolicyRun {
            policy,
            result: policy.run(&pages, capacity),
            report: None,
        })
        .collect();

    if config.write_reports {
        for run in &mut runs {
            let path = write_report_file(&config.out_dir, run.policy.label(), capacity, &run.result)?;
            run.report = Some(path);
        }
    }

    Ok(DriverOutput {
        pages,
        capacity,
        runs,
    })
}
