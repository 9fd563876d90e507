//! Page identifier type.

use std::fmt;

/// Identifies a logical page named by one entry of a reference string.
///
/// Using `u32` keeps identifiers non-negative by construction and leaves
/// far more room than any reference string will ever use.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// Convert a slice of raw identifiers into page IDs.
    pub fn sequence(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId).collect()
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
