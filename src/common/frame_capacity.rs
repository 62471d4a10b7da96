//! Frame capacity type.

use std::fmt;
use std::num::NonZeroUsize;

use super::error::{Error, Result};

/// Number of frames available to one simulation run.
///
/// Always at least one; the only way to build a `FrameCapacity` from a raw
/// count is [`FrameCapacity::new`], which rejects zero.
///
/// # Example
/// ```
/// use pagesim::FrameCapacity;
///
/// let capacity = FrameCapacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!(FrameCapacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameCapacity(NonZeroUsize);

impl FrameCapacity {
    /// Validate a raw frame count.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfiguration` if `frames` is zero.
    pub fn new(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames)
            .map(FrameCapacity)
            .ok_or(Error::InvalidConfiguration { capacity: frames })
    }

    /// The frame count as a plain `usize`.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for FrameCapacity {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        Self::new(frames)
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
