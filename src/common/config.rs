//! Simulation configuration.

use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// Default number of physical frames.
pub const DEFAULT_FRAME_COUNT: usize = 4;

/// Sample reference string used when no other input is given.
///
/// This is Belady's reference string: with 3 frames LRU takes 10 faults and
/// Optimal takes 7.
pub const DEFAULT_REFERENCE_STRING: &str = "1,2,3,4,1,2,5,1,2,3,4,5";

/// Replacement policy selector.
///
/// The set is closed, so the driver matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyKind {
    /// Evict the page whose last use is oldest.
    #[default]
    Lru,
    /// Evict the page whose next use is furthest in the future (Belady).
    Optimal,
}

impl PolicyKind {
    /// Every policy, in display order.
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Lru, PolicyKind::Optimal];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Lru => write!(f, "LRU"),
            PolicyKind::Optimal => write!(f, "Optimal"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            other => Err(format!("unknown policy: {other}")),
        }
    }
}

/// Parameters of one simulation run.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, SimulationConfig};
///
/// let config = SimulationConfig::new(3, PolicyKind::Optimal);
/// assert!(config.validate().is_ok());
/// assert!(SimulationConfig::new(0, PolicyKind::Lru).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of physical frames (N).
    pub frame_count: usize,

    /// Replacement policy.
    pub policy: PolicyKind,
}

impl SimulationConfig {
    /// Create a new configuration.
    pub fn new(frame_count: usize, policy: PolicyKind) -> Self {
        Self {
            frame_count,
            policy,
        }
    }

    /// Check the frame count.
    ///
    /// The reference sequence is checked separately by the driver since it
    /// isn't part of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count < 1 {
            return Err(ConfigError::InvalidFrameCount(self.frame_count));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_COUNT, PolicyKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("lru".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!("LRU".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!("Optimal".parse::<PolicyKind>(), Ok(PolicyKind::Optimal));
        assert_eq!(" belady ".parse::<PolicyKind>(), Ok(PolicyKind::Optimal));
        assert!("fifo".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(PolicyKind::Lru.to_string(), "LRU");
        assert_eq!(PolicyKind::Optimal.to_string(), "Optimal");
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.frame_count, DEFAULT_FRAME_COUNT);
        assert_eq!(config.policy, PolicyKind::Lru);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_frames_rejected() {
        let config = SimulationConfig::new(0, PolicyKind::Optimal);
        assert_eq!(config.validate(), Err(ConfigError::InvalidFrameCount(0)));
    }
}
