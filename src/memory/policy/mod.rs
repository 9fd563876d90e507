//! Replacement policies.
//!
//! Implements:
//! - [`LruPolicy`] - Least Recently Used
//! - [`OptimalPolicy`] - Belady's clairvoyant optimum
//!
//! [`Policy`] is a closed enum over the variants; the driver talks only to it.
//! Every variant breaks ties on the lowest page identifier.

mod lru;
mod optimal;

pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

use crate::common::{PageId, PolicyKind};
use crate::memory::FrameSet;

/// A replacement policy instance, owned by one run.
#[derive(Debug, Clone)]
pub enum Policy {
    Lru(LruPolicy),
    Optimal(OptimalPolicy),
}

impl Policy {
    /// Create the policy selected by `kind` for a run over `references`.
    ///
    /// Only Optimal looks at `references`; it needs the whole future.
    pub fn new(kind: PolicyKind, references: &[PageId]) -> Self {
        match kind {
            PolicyKind::Lru => Policy::Lru(LruPolicy::new()),
            PolicyKind::Optimal => Policy::Optimal(OptimalPolicy::new(references)),
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Optimal(_) => PolicyKind::Optimal,
        }
    }

    /// Record that `page` was referenced at `step` and is now resident.
    ///
    /// Called on every hit and after every load.
    pub fn record_access(&mut self, step: usize, page: PageId) {
        match self {
            Policy::Lru(p) => p.record_access(step, page),
            Policy::Optimal(p) => p.record_access(step, page),
        }
    }

    /// Choose the resident page to evict, or `None` if nothing is resident.
    pub fn victim(&self, frames: &FrameSet) -> Option<PageId> {
        match self {
            Policy::Lru(p) => p.victim(frames),
            Policy::Optimal(p) => p.victim(frames),
        }
    }

    /// Drop per-page state for an evicted page.
    pub fn remove(&mut self, page: PageId) {
        match self {
            Policy::Lru(p) => p.remove(page),
            Policy::Optimal(p) => p.remove(page),
        }
    }
}
