//! Page replacement simulation.
//!
//! Runs a replacement policy over an access trace and records the frame
//! contents after every access. Performs no I/O.
//!
//! # Components
//! - [`simulate_fifo`] / [`simulate_lru`] - The two core operations
//! - [`Policy`] - Uniform dispatch over both policies
//! - [`FrameSnapshot`] - Padded frame view after one access
//! - [`SimulationStats`] - Hit/fault counters
//! - [`replacer`] - Frame set implementations

pub mod replacer;
mod simulator;
mod snapshot;
mod stats;

pub use simulator::{run_policy, simulate_fifo, simulate_lru, Policy, SimulationResult, Step};
pub use snapshot::{FrameSnapshot, Slot, StepOutcome};
pub use stats::SimulationStats;
