//! Synthetic reference strings with locality of reference.
//!
//! Models a process as a small set of "hot" pages it keeps returning to and
//! a tail of "cold" pages, with the odd never-seen page late in the run.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::common::PageId;

/// Pages per megabyte of resident memory, inverted: one page per 50 MB.
const MB_PER_PAGE: f64 = 50.0;
const MIN_PAGES: u32 = 4;
const MAX_PAGES: u32 = 10;
/// Upper bound on `page_count` for hand-built profiles.
pub const MAX_PROFILE_PAGES: u32 = 1 << 16;
/// At most this many pages are hot.
const HOT_PAGES: u32 = 5;
const MIN_LOCALITY: f64 = 0.2;
const MAX_LOCALITY: f64 = 0.8;
/// References generated per profile.
const DEFAULT_LENGTH: usize = 30;
/// New pages only appear after this index...
const FRESH_PAGE_AFTER: usize = 20;
/// ...and then with this probability on a cold draw.
const FRESH_PAGE_PROBABILITY: f64 = 0.3;

/// Parameters of a synthetic reference string.
///
/// # Example
/// ```
/// use pagesim::WorkloadProfile;
///
/// let profile = WorkloadProfile::from_memory_mb(300.0);
/// assert_eq!(profile.page_count, 6);
///
/// // Same seed, same sequence
/// assert_eq!(profile.generate(7), profile.generate(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadProfile {
    /// Distinct pages in the working set, numbered from 1.
    pub page_count: u32,

    /// Probability that a reference goes to a hot page.
    pub locality: f64,

    /// Number of references to generate.
    pub length: usize,
}

impl WorkloadProfile {
    /// Create a profile. `page_count` is clamped to
    /// `1..=MAX_PROFILE_PAGES` and `locality` to `[0, 1]`; a non-finite
    /// locality counts as 0.
    pub fn new(page_count: u32, locality: f64, length: usize) -> Self {
        Self {
            page_count: page_count.clamp(1, MAX_PROFILE_PAGES),
            locality: probability(locality),
            length,
        }
    }

    /// Derive a profile from a process's resident memory size.
    ///
    /// Bigger processes get more pages and stronger locality, both capped.
    /// A negative or non-finite size counts as 0.
    pub fn from_memory_mb(memory_mb: f64) -> Self {
        let memory_mb = if memory_mb.is_finite() {
            memory_mb.max(0.0)
        } else {
            0.0
        };
        let pages = (memory_mb / MB_PER_PAGE) as u32;
        let locality = (0.4 + memory_mb / 1000.0).clamp(MIN_LOCALITY, MAX_LOCALITY);

        Self {
            page_count: pages.clamp(MIN_PAGES, MAX_PAGES),
            locality,
            length: DEFAULT_LENGTH,
        }
    }

    /// Frequently referenced pages.
    pub fn hot_pages(&self) -> Vec<PageId> {
        (1..=self.page_count.min(HOT_PAGES)).map(PageId::new).collect()
    }

    /// The rest of the working set.
    pub fn cold_pages(&self) -> Vec<PageId> {
        (self.page_count.min(HOT_PAGES) + 1..=self.page_count)
            .map(PageId::new)
            .collect()
    }

    /// Generate a reference string from a fixed seed.
    pub fn generate(&self, seed: u64) -> Vec<PageId> {
        self.generate_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate a reference string from any random source.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<PageId> {
        // Fields are public, so sanitize again here.
        let page_count = self.page_count.max(1);
        let locality = probability(self.locality);
        let hot = self.hot_pages();
        let first_cold = page_count.min(HOT_PAGES) + 1;

        let mut sequence = Vec::with_capacity(self.length);
        let mut distinct = HashSet::new();

        for i in 0..self.length {
            let page = if rng.gen_bool(locality) {
                hot.choose(rng).copied().unwrap_or(PageId::new(1))
            } else if i > FRESH_PAGE_AFTER && rng.gen_bool(FRESH_PAGE_PROBABILITY) {
                let seen = u32::try_from(distinct.len()).unwrap_or(u32::MAX);
                PageId::new(page_count.saturating_add(1).saturating_add(seen))
            } else if first_cold <= page_count {
                PageId::new(rng.gen_range(first_cold..=page_count))
            } else {
                PageId::new(rng.gen_range(1..=page_count))
            };

            distinct.insert(page);
            sequence.push(page);
        }

        sequence
    }
}

/// Clamp to `[0, 1]`, mapping NaN and infinities to 0.
fn probability(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
