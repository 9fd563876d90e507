//! Side-by-side runs of every policy.

use std::fmt;

use crate::common::{PageId, PolicyKind, Result};
use crate::simulation::{run, SimulationResult};

/// LRU and Optimal results for the same reference string and frame count.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyComparison {
    pub lru: SimulationResult,
    pub optimal: SimulationResult,
}

impl PolicyComparison {
    /// Result for `kind`.
    pub fn get(&self, kind: PolicyKind) -> &SimulationResult {
        match kind {
            PolicyKind::Lru => &self.lru,
            PolicyKind::Optimal => &self.optimal,
        }
    }

    /// Extra faults LRU takes over the optimum.
    pub fn fault_gap(&self) -> u64 {
        self.lru.faults().saturating_sub(self.optimal.faults())
    }
}

impl fmt::Display for PolicyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in PolicyKind::ALL {
            let result = self.get(kind);
            writeln!(
                f,
                "{:<8} faults: {:>4}  fault rate: {:>6.2}%",
                kind.to_string(),
                result.faults(),
                result.fault_rate() * 100.0
            )?;
        }
        write!(f, "LRU takes {} fault(s) more than optimal", self.fault_gap())
    }
}

/// Run every policy over `references` with `frame_count` frames.
///
/// # Errors
/// - `Error::Config` if `frame_count < 1` or `references` is empty
pub fn compare(references: &[PageId], frame_count: usize) -> Result<PolicyComparison> {
    Ok(PolicyComparison {
        lru: run(references, frame_count, PolicyKind::Lru)?,
        optimal: run(references, frame_count, PolicyKind::Optimal)?,
    })
}
