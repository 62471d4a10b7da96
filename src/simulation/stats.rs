//! Simulation statistics.

use std::fmt;

use super::snapshot::StepOutcome;

/// Counters accumulated over one simulation run.
///
/// Unlike the frame history, stats are cheap to copy and compare, which
/// makes them the natural thing to print when comparing policies.
///
/// # Example
/// ```
/// use pagesim::{common::pages, simulate_lru};
///
/// let result = simulate_lru(&pages(&[1, 2, 1, 3]), 2).unwrap();
/// let stats = result.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.faults, 3);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of accesses simulated.
    pub accesses: u64,

    /// Number of accesses that found the page resident.
    pub hits: u64,

    /// Number of page faults.
    pub faults: u64,

    /// Number of faults that had to evict a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one step.
    pub fn record(&mut self, outcome: StepOutcome) {
        self.accesses += 1;
        match outcome {
            StepOutcome::Hit => self.hits += 1,
            StepOutcome::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Fraction of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
