//! Page identifier type.

use std::fmt;

/// Identifies a page in an access trace.
///
/// Page numbers carry no meaning beyond identity, so any integer the trace
/// loader accepts (including negatives) is a valid page.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build an access trace from plain integers.
///
/// ```
/// use pagesim::common::pages;
///
/// let trace = pages(&[1, 2, 1]);
/// assert_eq!(trace.len(), 3);
/// ```
pub fn pages(ids: &[i64]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}
