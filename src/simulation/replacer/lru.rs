//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::{FrameCapacity, PageId};
use crate::simulation::snapshot::{FrameSnapshot, StepOutcome};

use super::FrameSet;

/// A node of the recency list.
#[derive(Debug, Clone)]
struct Node {
    page: PageId,
    /// Neighbour closer to the least recently used end.
    prev: Option<usize>,
    /// Neighbour closer to the most recently used end.
    next: Option<usize>,
}

/// Frame set that evicts the least recently touched page.
///
/// # Structure
/// ```text
///   head (LRU)                               tail (MRU)
///   ┌──────┐  next  ┌──────┐  next  ┌──────┐
///   │  p3  │ ─────→ │  p1  │ ─────→ │  p7  │
///   └──────┘ ←───── └──────┘ ←───── └──────┘
///              prev            prev
/// ```
/// Nodes live in a slab indexed by `usize`, and `index` maps each resident
/// page to its slot, so hits, evictions and insertions are all O(1).
/// Snapshots walk the list from head to tail: least recently used first.
#[derive(Debug, Clone)]
pub struct LruFrames {
    capacity: FrameCapacity,
    nodes: Vec<Node>,
    /// Slab slots released by eviction.
    free: Vec<usize>,
    index: HashMap<PageId, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl LruFrames {
    /// Create an empty LRU frame set.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            capacity,
            nodes: Vec::with_capacity(capacity.get()),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity.get()),
            head: None,
            tail: None,
        }
    }

    /// The page the next eviction would remove.
    pub fn least_recent(&self) -> Option<PageId> {
        self.head.map(|idx| self.nodes[idx].page)
    }

    /// The page touched last.
    pub fn most_recent(&self) -> Option<PageId> {
        self.tail.map(|idx| self.nodes[idx].page)
    }

    /// Iterate resident pages from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = &self.nodes[cursor?];
            cursor = node.next;
            Some(node.page)
        })
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    fn push_back(&mut self, idx: usize) {
        self.nodes[idx].prev = self.tail;
        self.nodes[idx].next = None;

        match self.tail {
            Some(t) => self.nodes[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    fn allocate(&mut self, page: PageId) -> usize {
        let node = Node {
            page,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Remove and return the least recently used page.
    fn evict(&mut self) -> Option<PageId> {
        let victim = self.head?;
        self.unlink(victim);
        self.free.push(victim);

        let page = self.nodes[victim].page;
        self.index.remove(&page);
        Some(page)
    }
}

impl FrameSet for LruFrames {
    fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.index.contains_key(&page)
    }

    fn access(&mut self, page: PageId) -> StepOutcome {
        if let Some(&idx) = self.index.get(&page) {
            if self.tail != Some(idx) {
                self.unlink(idx);
                self.push_back(idx);
            }
            return StepOutcome::Hit;
        }

        let evicted = if self.is_full() { self.evict() } else { None };
        let idx = self.allocate(page);
        self.push_back(idx);
        self.index.insert(page, idx);

        StepOutcome::Fault { evicted }
    }

    fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::from_resident(self.iter(), self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> LruFrames {
        LruFrames::new(FrameCapacity::new(n).unwrap())
    }

    #[test]
    fn test_lru_basic_eviction() {
        let mut lru = frames(3);
        lru.access(PageId(1));
        lru.access(PageId(2));
        lru.access(PageId(3));

        assert_eq!(lru.least_recent(), Some(PageId(1)));
        assert_eq!(lru.access(PageId(4)).evicted(), Some(PageId(1)));
        assert_eq!(lru.resident(), vec![PageId(2), PageId(3), PageId(4)]);
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut lru = frames(3);
        lru.access(PageId(1));
        lru.access(PageId(2));
        lru.access(PageId(3));

        assert_eq!(lru.access(PageId(1)), StepOutcome::Hit);
        assert_eq!(lru.resident(), vec![PageId(2), PageId(3), PageId(1)]);
        assert_eq!(lru.most_recent(), Some(PageId(1)));

        // 2 is now least recent
        assert_eq!(lru.access(PageId(4)).evicted(), Some(PageId(2)));
    }

    #[test]
    fn test_lru_hit_on_middle_and_tail() {
        let mut lru = frames(3);
        lru.access(PageId(1));
        lru.access(PageId(2));
        lru.access(PageId(3));

        lru.access(PageId(2)); // middle
        assert_eq!(lru.resident(), vec![PageId(1), PageId(3), PageId(2)]);

        lru.access(PageId(2)); // already most recent
        assert_eq!(lru.resident(), vec![PageId(1), PageId(3), PageId(2)]);
    }

    #[test]
    fn test_lru_single_frame() {
        let mut lru = frames(1);
        assert_eq!(lru.access(PageId(1)), StepOutcome::Fault { evicted: None });
        assert_eq!(lru.access(PageId(1)), StepOutcome::Hit);
        assert_eq!(lru.access(PageId(2)).evicted(), Some(PageId(1)));
        assert_eq!(lru.least_recent(), Some(PageId(2)));
        assert_eq!(lru.most_recent(), Some(PageId(2)));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_reuses_slab_slots() {
        let mut lru = frames(2);
        for page in 0..100 {
            lru.access(PageId(page));
        }
        assert_eq!(lru.nodes.len(), 2);
        assert_eq!(lru.resident(), vec![PageId(98), PageId(99)]);
    }

    #[test]
    fn test_lru_empty() {
        let lru = frames(2);
        assert!(lru.is_empty());
        assert_eq!(lru.least_recent(), None);
        assert_eq!(lru.iter().count(), 0);
        assert_eq!(lru.snapshot().to_string(), "[-, -]");
    }
}
