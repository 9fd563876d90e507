//! Optimal (Belady) replacement policy.
//!
//! Clairvoyant: it needs the whole reference string up front, so it is only
//! a baseline for judging online policies, never something an OS can run.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::PageId;
use crate::memory::FrameSet;

/// Evicts the resident page whose next use lies furthest in the future.
///
/// `next_after[t]` is precomputed in one backward pass: the next step after
/// `t` that references the same page as step `t`. Recording an access then
/// stores the page's next use directly, so picking a victim is a scan over
/// the resident pages rather than over the remaining sequence.
#[derive(Debug, Clone)]
pub struct OptimalPolicy {
    /// For each step, the next step referencing the same page.
    next_after: Vec<Option<usize>>,

    /// Next use of each resident page as of its latest access.
    next_use: HashMap<PageId, Option<usize>>,
}

impl OptimalPolicy {
    /// Build the lookahead table for `references`.
    pub fn new(references: &[PageId]) -> Self {
        let mut next_after = vec![None; references.len()];
        let mut seen: HashMap<PageId, usize> = HashMap::new();

        for (step, &page) in references.iter().enumerate().rev() {
            next_after[step] = seen.insert(page, step);
        }

        Self {
            next_after,
            next_use: HashMap::new(),
        }
    }

    /// Record that `page` was referenced at `step`.
    pub fn record_access(&mut self, step: usize, page: PageId) {
        let next = self.next_after.get(step).copied().flatten();
        self.next_use.insert(page, next);
    }

    /// Next step at which `page` is referenced, `None` if never again.
    pub fn next_use(&self, page: PageId) -> Option<usize> {
        self.next_use.get(&page).copied().flatten()
    }

    /// The resident page used furthest in the future.
    ///
    /// Pages never used again count as infinitely far. Ties go to the
    /// lowest page identifier.
    pub fn victim(&self, frames: &FrameSet) -> Option<PageId> {
        frames
            .resident_pages()
            .into_iter()
            .min_by_key(|&page| {
                let distance = self.next_use(page).unwrap_or(usize::MAX);
                (Reverse(distance), page)
            })
    }

    /// Forget `page`.
    pub fn remove(&mut self, page: PageId) {
        self.next_use.remove(&page);
    }
}
