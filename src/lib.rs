//! pagesim - A page-replacement trace simulator comparing FIFO and LRU.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Driver (driver)                         │   │
//! │  │        load trace → run policies → write reports         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │               ↓                              ↓                  │
//! │  ┌──────────────────────────┐   ┌──────────────────────────┐   │
//! │  │   Trace I/O (trace/)     │   │ Simulation (simulation/) │   │
//! │  │  TraceLoader + reports   │   │  FIFO | LRU frame sets   │   │
//! │  └──────────────────────────┘   │  snapshots + statistics  │   │
//! │                                 └──────────────────────────┘   │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │     Common (common/): PageId, FrameCapacity, Error       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameCapacity, Error, config)
//! - [`simulation`] - Replacement policies, snapshots and statistics
//! - [`trace`] - Trace loading and report writing
//! - [`driver`] - Runs both policies over one trace file
//!
//! # Quick Start
//! ```
//! use pagesim::{common::pages, simulate_fifo, simulate_lru};
//!
//! let trace = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
//!
//! let fifo = simulate_fifo(&trace, 3).unwrap();
//! let lru = simulate_lru(&trace, 3).unwrap();
//! assert_eq!(fifo.fault_count(), 9);
//! assert_eq!(lru.fault_count(), 10);
//! ```

pub mod common;
pub mod driver;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameCapacity, PageId, Result};

pub use simulation::{
    simulate_fifo, simulate_lru, FrameSnapshot, Policy, SimulationResult, SimulationStats, Slot,
    StepOutcome,
};
pub use trace::TraceLoader;
