//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::{FrameCapacity, PageId};
use crate::simulation::snapshot::{FrameSnapshot, StepOutcome};

use super::FrameSet;

/// Frame set that evicts pages in the order they arrived.
///
/// Hits do not reorder anything, so a page loaded early is evicted early no
/// matter how often it is referenced afterwards.
#[derive(Debug, Clone)]
pub struct FifoFrames {
    capacity: FrameCapacity,

    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,
}

impl FifoFrames {
    /// Create an empty FIFO frame set.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity.get()),
            resident: HashSet::with_capacity(capacity.get()),
        }
    }

    /// The page the next eviction would remove.
    pub fn oldest(&self) -> Option<PageId> {
        self.queue.front().copied()
    }

    /// Remove and return the oldest arrival.
    fn evict(&mut self) -> Option<PageId> {
        let victim = self.queue.pop_front()?;
        self.resident.remove(&victim);
        Some(victim)
    }
}

impl FrameSet for FifoFrames {
    fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn access(&mut self, page: PageId) -> StepOutcome {
        if self.resident.contains(&page) {
            return StepOutcome::Hit;
        }

        let evicted = if self.is_full() { self.evict() } else { None };
        self.queue.push_back(page);
        self.resident.insert(page);

        StepOutcome::Fault { evicted }
    }

    fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::from_resident(self.queue.iter().copied(), self.capacity)
    }
}
