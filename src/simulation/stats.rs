//! Run statistics.

use std::fmt;

/// Aggregate counts for one run.
///
/// Invariant: `faults + hits == references`.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.fault_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of references processed.
    pub references: u64,

    /// References that found their page absent.
    pub faults: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// Faults that had to evict a victim.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a stats record with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a hit.
    pub fn record_hit(&mut self) {
        self.references += 1;
        self.hits += 1;
    }

    /// Count a fault, and an eviction if one was needed.
    pub fn record_fault(&mut self, evicted: bool) {
        self.references += 1;
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Faults per reference (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Hits per reference (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.faults,
            self.hits,
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimulationStats::new();
        assert_eq!(stats.references, 0);
        assert_eq!(stats.fault_rate(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SimulationStats::new();
        for _ in 0..3 {
            stats.record_fault(false);
        }
        stats.record_fault(true);
        for _ in 0..6 {
            stats.record_hit();
        }

        assert_eq!(stats.references, 10);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.faults + stats.hits, stats.references);
        assert_eq!(stats.fault_rate(), 0.4);
        assert_eq!(stats.hit_rate(), 0.6);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = SimulationStats::new();
        stats.record_fault(true);
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();

        let display = format!("{}", stats);
        assert!(display.contains("faults: 1"));
        assert!(display.contains("hits: 3"));
        assert!(display.contains("evictions: 1"));
        assert!(display.contains("25.00%"));
    }
}
