//! Page replacement policy implementations.
//!
//! Each policy owns a run-scoped frame set behind the [`FrameSet`] trait:
//! - [`FifoFrames`] - evicts the oldest arrival, hits change nothing
//! - [`LruFrames`] - evicts the least recently touched page, every access
//!   refreshes recency

mod fifo;
mod lru;

pub use fifo::FifoFrames;
pub use lru::LruFrames;

use crate::common::{FrameCapacity, PageId};

use super::snapshot::{FrameSnapshot, StepOutcome};

/// The resident working set of one simulation run.
///
/// Implementations never hold more than `capacity()` pages and never hold
/// the same page twice.
pub trait FrameSet {
    /// Number of frames available.
    fn capacity(&self) -> FrameCapacity;

    /// Number of resident pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity().get()
    }

    /// Check whether `page` is resident.
    fn contains(&self, page: PageId) -> bool;

    /// Reference `page`, loading it (and evicting if full) when absent.
    fn access(&mut self, page: PageId) -> StepOutcome;

    /// Padded view of the resident pages in this policy's order.
    fn snapshot(&self) -> FrameSnapshot;

    /// Resident pages in this policy's order.
    fn resident(&self) -> Vec<PageId> {
        self.snapshot().pages().collect()
    }
}
