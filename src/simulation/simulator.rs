//! Driving a frame set over an access trace.

use std::fmt;

use crate::common::{FrameCapacity, PageId, Result};

use super::replacer::{FifoFrames, FrameSet, LruFrames};
use super::snapshot::{FrameSnapshot, StepOutcome};
use super::stats::SimulationStats;

/// One processed access: the page referenced, what happened, and the
/// frames afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub page: PageId,
    pub outcome: StepOutcome,
    pub snapshot: FrameSnapshot,
}

/// The outcome of running one policy over one trace.
///
/// Holds one [`Step`] per access, in trace order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    capacity: FrameCapacity,
    steps: Vec<Step>,
    stats: SimulationStats,
}

impl SimulationResult {
    /// Total number of page faults.
    pub fn fault_count(&self) -> u64 {
        self.stats.faults
    }

    /// Frame capacity the run was configured with.
    pub fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    /// Snapshots in trace order, one per access.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &FrameSnapshot> + '_ {
        self.steps.iter().map(|step| &step.snapshot)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Snapshot after the last access, or `None` for an empty trace.
    pub fn final_snapshot(&self) -> Option<&FrameSnapshot> {
        self.steps.last().map(|step| &step.snapshot)
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }
}

/// Fold `pages` through `frames`, recording a snapshot after every access.
///
/// `frames` is consumed: its state belongs to this run only.
pub fn run_policy<F: FrameSet>(mut frames: F, pages: &[PageId]) -> SimulationResult {
    let mut steps = Vec::with_capacity(pages.len());
    let mut stats = SimulationStats::new();

    for &page in pages {
        let outcome = frames.access(page);
        stats.record(outcome);
        steps.push(Step {
            page,
            outcome,
            snapshot: frames.snapshot(),
        });
    }

    SimulationResult {
        capacity: frames.capacity(),
        steps,
        stats,
    }
}

/// Simulate FIFO replacement over `pages` with `capacity` frames.
///
/// # Errors
/// Returns `Error::InvalidConfiguration` if `capacity` is zero. No step runs
/// in that case.
///
/// # Example
/// ```
/// use pagesim::{common::pages, simulate_fifo};
///
/// let result = simulate_fifo(&pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3]), 3).unwrap();
/// assert_eq!(result.fault_count(), 8);
/// ```
pub fn simulate_fifo(pages: &[PageId], capacity: usize) -> Result<SimulationResult> {
    let capacity = FrameCapacity::new(capacity)?;
    Ok(Policy::Fifo.run(pages, capacity))
}

/// Simulate LRU replacement over `pages` with `capacity` frames.
///
/// # Errors
/// Returns `Error::InvalidConfiguration` if `capacity` is zero. No step runs
/// in that case.
pub fn simulate_lru(pages: &[PageId], capacity: usize) -> Result<SimulationResult> {
    let capacity = FrameCapacity::new(capacity)?;
    Ok(Policy::Lru.run(pages, capacity))
}

/// The replacement policies the simulator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
}

impl Policy {
    /// Every policy, in reporting order.
    pub const ALL: [Policy; 2] = [Policy::Fifo, Policy::Lru];

    /// Label used in reports and report file names.
    pub fn label(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
        }
    }

    /// Parse a policy name, ignoring case.
    pub fn parse(name: &str) -> Option<Policy> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.label().eq_ignore_ascii_case(name.trim()))
    }

    /// Run this policy with an already validated capacity.
    pub fn run(self, pages: &[PageId], capacity: FrameCapacity) -> SimulationResult {
        match self {
            Policy::Fifo => run_policy(FifoFrames::new(capacity), pages),
            Policy::Lru => run_policy(LruFrames::new(capacity), pages),
        }
    }

    /// Validate `capacity` and run this policy.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfiguration` if `capacity` is zero.
    pub fn simulate(self, pages: &[PageId], capacity: usize) -> Result<SimulationResult> {
        match self {
            Policy::Fifo => simulate_fifo(pages, capacity),
            Policy::Lru => simulate_lru(pages, capacity),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
