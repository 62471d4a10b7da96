//! Per-step frame snapshots and step outcomes.

use std::fmt;

use crate::common::config::EMPTY_SLOT_MARKER;
use crate::common::{FrameCapacity, PageId};

/// One frame slot as seen in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The slot holds a resident page.
    Page(PageId),
    /// The slot is unused. Never equal to any page.
    Empty,
}

impl Slot {
    /// The page held by this slot, if any.
    #[inline]
    pub fn page(self) -> Option<PageId> {
        match self {
            Slot::Page(page) => Some(page),
            Slot::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Slot::Empty)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Page(page) => write!(f, "{}", page),
            Slot::Empty => f.write_str(EMPTY_SLOT_MARKER),
        }
    }
}

/// The padded view of a frame set after one access.
///
/// A snapshot always has exactly `capacity` slots: resident pages first, in
/// the order the policy keeps them, then [`Slot::Empty`] for every unused
/// frame. Every snapshot of one run therefore has the same width.
///
/// # Example
/// ```
/// use pagesim::{FrameCapacity, FrameSnapshot, PageId};
///
/// let capacity = FrameCapacity::new(3).unwrap();
/// let snapshot = FrameSnapshot::from_resident([PageId(7), PageId(2)], capacity);
/// assert_eq!(snapshot.len(), 3);
/// assert_eq!(snapshot.to_string(), "[7, 2, -]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSnapshot {
    slots: Vec<Slot>,
}

impl FrameSnapshot {
    /// Build a snapshot from the resident pages in policy order.
    ///
    /// The caller guarantees at most `capacity` pages are supplied.
    pub fn from_resident<I>(resident: I, capacity: FrameCapacity) -> Self
    where
        I: IntoIterator<Item = PageId>,
    {
        let mut slots = Vec::with_capacity(capacity.get());
        slots.extend(resident.into_iter().map(Slot::Page));
        debug_assert!(slots.len() <= capacity.get(), "more resident pages than frames");
        slots.resize(capacity.get(), Slot::Empty);
        Self { slots }
    }

    /// All slots, including empty ones.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots. Equal to the run's frame capacity.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: a snapshot has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resident pages in policy order, skipping empty slots.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().filter_map(|slot| slot.page())
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.pages().count()
    }
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", slot)?;
        }
        f.write_str("]")
    }
}

/// What happened to the frame set on one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// The page was already resident.
    Hit,
    /// The page was not resident and was loaded.
    ///
    /// `evicted` is the page that made room for it, or `None` while free
    /// frames remained.
    Fault { evicted: Option<PageId> },
}

impl StepOutcome {
    #[inline]
    pub fn is_fault(self) -> bool {
        matches!(self, StepOutcome::Fault { .. })
    }

    /// The page evicted by this step, if any.
    #[inline]
    pub fn evicted(self) -> Option<PageId> {
        match self {
            StepOutcome::Fault { evicted } => evicted,
            StepOutcome::Hit => None,
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Hit => f.write_str("hit"),
            StepOutcome::Fault { evicted: None } => f.write_str("fault"),
            StepOutcome::Fault {
                evicted: Some(page),
            } => write!(f, "fault (evicted {})", page),
        }
    }
}
