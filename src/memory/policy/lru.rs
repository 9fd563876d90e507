//! LRU (Least Recently Used) replacement policy.

use std::collections::{BTreeSet, HashMap};

use crate::common::PageId;
use crate::memory::FrameSet;

/// Evicts the resident page whose most recent use is oldest.
///
/// Keeps `(last_used, page)` pairs in an ordered set so the victim is the
/// first entry: O(log N) per access instead of an O(N) scan. Because the
/// pair orders by page after time, equal timestamps resolve to the lowest
/// page identifier.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Step of the most recent use of each tracked page.
    last_used: HashMap<PageId, usize>,

    /// Same data, ordered oldest first.
    recency: BTreeSet<(usize, PageId)>,
}

impl LruPolicy {
    /// Create an LRU policy with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a use of `page` at `step`.
    pub fn record_access(&mut self, step: usize, page: PageId) {
        if let Some(prev) = self.last_used.insert(page, step) {
            self.recency.remove(&(prev, page));
        }
        self.recency.insert((step, page));
    }

    /// Step of the most recent use of `page`, if tracked.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }

    /// The least recently used resident page.
    pub fn victim(&self, frames: &FrameSet) -> Option<PageId> {
        self.recency
            .iter()
            .map(|&(_, page)| page)
            .find(|&page| frames.contains(page))
    }

    /// Forget `page`.
    pub fn remove(&mut self, page: PageId) {
        if let Some(step) = self.last_used.remove(&page) {
            self.recency.remove(&(step, page));
        }
    }

    /// Number of tracked pages.
    pub fn len(&self) -> usize {
        self.last_used.len()
    }

    /// True if no page is tracked.
    pub fn is_empty(&self) -> bool {
        self.last_used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PageId {
        PageId::new(id)
    }

    fn full_frames(pages: &[u32]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for &p in pages {
            frames.load(pid(p)).unwrap();
        }
        frames
    }

    #[test]
    fn test_lru_basic() {
        let mut lru = LruPolicy::new();
        let frames = full_frames(&[1, 2, 3]);

        lru.record_access(0, pid(1));
        lru.record_access(1, pid(2));
        lru.record_access(2, pid(3));

        assert_eq!(lru.victim(&frames), Some(pid(1)));
    }

    #[test]
    fn test_lru_reaccess_reorders() {
        let mut lru = LruPolicy::new();
        let frames = full_frames(&[1, 2, 3]);

        lru.record_access(0, pid(1));
        lru.record_access(1, pid(2));
        lru.record_access(2, pid(3));
        lru.record_access(3, pid(1)); // 1 becomes most recent

        assert_eq!(lru.last_used(pid(1)), Some(3));
        assert_eq!(lru.victim(&frames), Some(pid(2)));
        assert_eq!(lru.len(), 3);
    }

    #[test]
    fn test_lru_tie_breaks_on_lowest_page() {
        let mut lru = LruPolicy::new();
        let frames = full_frames(&[9, 4, 6]);

        // Same timestamp for 9 and 4; 6 is newer
        lru.record_access(5, pid(9));
        lru.record_access(5, pid(4));
        lru.record_access(6, pid(6));

        assert_eq!(lru.victim(&frames), Some(pid(4)));
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruPolicy::new();
        let frames = full_frames(&[1, 2]);

        lru.record_access(0, pid(1));
        lru.record_access(1, pid(2));
        lru.remove(pid(1));

        assert_eq!(lru.last_used(pid(1)), None);
        assert_eq!(lru.victim(&frames), Some(pid(2)));

        lru.remove(pid(2));
        assert!(lru.is_empty());
        assert_eq!(lru.victim(&frames), None);
    }

    #[test]
    fn test_lru_skips_pages_not_resident() {
        let mut lru = LruPolicy::new();
        let frames = full_frames(&[2]);

        lru.record_access(0, pid(1));
        lru.record_access(1, pid(2));

        assert_eq!(lru.victim(&frames), Some(pid(2)));
    }
}
