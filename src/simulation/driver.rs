//! Simulation driver - replays a reference string against a frame set.
//!
//! The [`Simulator`] provides:
//! - Validation of the run parameters before any step
//! - Step-at-a-time replay for animated front ends
//! - A finished [`SimulationResult`] handed off by value

use log::{debug, info, trace};

use crate::common::{ConfigError, FrameId, PageId, PolicyKind, Result, SimulationConfig};
use crate::memory::{FrameSet, Policy};
use crate::simulation::{SimulationStats, StepSnapshot};

/// Lifecycle of a [`Simulator`]. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No reference processed yet.
    Ready,
    /// At least one reference processed, more remain.
    Running,
    /// Every reference consumed.
    Done,
}

/// Owns the frame set and policy state of one run.
///
/// # Architecture
/// ```text
/// references ──▶ ┌────────────────────────────────────┐
///                │             Simulator              │
///                │  frames: FrameSet   policy: Policy │ ──▶ SimulationResult
///                │  trace: Vec<StepSnapshot>  stats   │
///                └────────────────────────────────────┘
/// ```
///
/// A new run needs a new `Simulator`; nothing is shared between runs.
///
/// # Usage
/// ```
/// use pagesim::{PageId, PolicyKind, SimulationConfig, Simulator};
///
/// let refs = PageId::sequence(&[1, 2, 1]);
/// let mut sim = Simulator::new(&refs, SimulationConfig::new(2, PolicyKind::Lru)).unwrap();
///
/// let first = sim.step().unwrap().unwrap();
/// assert!(first.fault);
///
/// let result = sim.finish().unwrap();
/// assert_eq!(result.faults(), 2);
/// ```
#[derive(Debug)]
pub struct Simulator<'a> {
    references: &'a [PageId],
    config: SimulationConfig,
    frames: FrameSet,
    policy: Policy,
    state: RunState,
    trace: Vec<StepSnapshot>,
    stats: SimulationStats,
}

impl<'a> Simulator<'a> {
    /// Validate the parameters and prepare a run.
    ///
    /// # Errors
    /// - `Error::Config` if `frame_count < 1` or `references` is empty
    pub fn new(references: &'a [PageId], config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        if references.is_empty() {
            return Err(ConfigError::EmptySequence.into());
        }

        Ok(Self {
            references,
            config,
            frames: FrameSet::new(config.frame_count),
            policy: Policy::new(config.policy, references),
            state: RunState::Ready,
            trace: Vec::with_capacity(references.len()),
            stats: SimulationStats::new(),
        })
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Parameters of this run.
    #[inline]
    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Frame set as of the last processed step.
    #[inline]
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Counts so far.
    #[inline]
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Process the next reference.
    ///
    /// Returns the new snapshot, or `None` once every reference is consumed.
    ///
    /// # Errors
    /// Only on a frame-set invariant violation, which is a bug in the
    /// policy or driver.
    pub fn step(&mut self) -> Result<Option<&StepSnapshot>> {
        let step = self.trace.len();
        let Some(&page) = self.references.get(step) else {
            self.state = RunState::Done;
            return Ok(None);
        };

        let snapshot = self.process(step, page)?;
        self.trace.push(snapshot);

        self.state = if self.trace.len() == self.references.len() {
            RunState::Done
        } else {
            RunState::Running
        };

        Ok(self.trace.last())
    }

    /// Process every remaining reference and hand off the result.
    ///
    /// # Errors
    /// Same as [`Simulator::step`]; the run is dropped without a result.
    pub fn finish(mut self) -> Result<SimulationResult> {
        while self.step()?.is_some() {}

        info!(
            "{} run over {} references with {} frames: {}",
            self.config.policy,
            self.references.len(),
            self.config.frame_count,
            self.stats
        );

        Ok(SimulationResult {
            policy: self.config.policy,
            frame_count: self.config.frame_count,
            steps: self.trace,
            stats: self.stats,
        })
    }

    fn process(&mut self, step: usize, page: PageId) -> Result<StepSnapshot> {
        if let Some(frame) = self.frames.frame_of(page) {
            self.policy.record_access(step, page);
            self.stats.record_hit();
            trace!("step {}: hit {} in {}", step, page, frame);

            return Ok(self.snapshot(step, page, false, None, frame));
        }

        let mut evicted = None;
        if self.frames.is_full() {
            // A full frame set always has a resident page to offer.
            if let Some(victim) = self.policy.victim(&self.frames) {
                self.frames.evict(victim)?;
                self.policy.remove(victim);
                evicted = Some(victim);
            }
        }

        let frame = self.frames.load(page)?;
        self.policy.record_access(step, page);
        self.stats.record_fault(evicted.is_some());

        match evicted {
            Some(victim) => debug!(
                "step {}: fault on {}, evicted {} from {}",
                step, page, victim, frame
            ),
            None => debug!("step {}: fault on {}, loaded into {}", step, page, frame),
        }

        Ok(self.snapshot(step, page, true, evicted, frame))
    }

    fn snapshot(
        &self,
        step: usize,
        page: PageId,
        fault: bool,
        evicted: Option<PageId>,
        frame: FrameId,
    ) -> StepSnapshot {
        StepSnapshot {
            step,
            page,
            fault,
            evicted,
            frame,
            frames: self.frames.frames().to_vec(),
        }
    }
}

/// Replay `references` with `frame_count` frames under `policy`.
///
/// Pure: the same inputs always give an identical result.
///
/// # Errors
/// - `Error::Config` if `frame_count < 1` or `references` is empty
///
/// # Example
/// ```
/// use pagesim::{run, PageId, PolicyKind};
///
/// let refs = PageId::sequence(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let result = run(&refs, 3, PolicyKind::Optimal).unwrap();
/// assert_eq!(result.faults(), 7);
/// ```
pub fn run(
    references: &[PageId],
    frame_count: usize,
    policy: PolicyKind,
) -> Result<SimulationResult> {
    Simulator::new(references, SimulationConfig::new(frame_count, policy))?.finish()
}

/// Output of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Policy that produced the trace.
    pub policy: PolicyKind,

    /// Number of frames simulated.
    pub frame_count: usize,

    /// One snapshot per reference, in input order.
    pub steps: Vec<StepSnapshot>,

    /// Aggregate counts.
    pub stats: SimulationStats,
}

impl SimulationResult {
    /// Total faults.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    /// Total hits.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Faults divided by total references.
    #[inline]
    pub fn fault_rate(&self) -> f64 {
        self.stats.fault_rate()
    }

    /// Referenced pages, in input order.
    pub fn references(&self) -> Vec<PageId> {
        self.steps.iter().map(|s| s.page).collect()
    }

    /// Frame contents after the last step.
    pub fn final_frames(&self) -> &[Option<PageId>] {
        self.steps.last().map_or(&[], |s| s.frames.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn pid(id: u32) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_zero_frames_is_config_error() {
        let refs = PageId::sequence(&[1, 2]);
        let err = run(&refs, 0, PolicyKind::Lru).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidFrameCount(0))
        ));
    }

    #[test]
    fn test_empty_sequence_is_config_error() {
        let err = run(&[], 3, PolicyKind::Optimal).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::EmptySequence)));
    }

    #[test]
    fn test_state_transitions() {
        let refs = PageId::sequence(&[1, 2]);
        let mut sim = Simulator::new(&refs, SimulationConfig::new(1, PolicyKind::Lru)).unwrap();
        assert_eq!(sim.state(), RunState::Ready);

        sim.step().unwrap();
        assert_eq!(sim.state(), RunState::Running);

        sim.step().unwrap();
        assert_eq!(sim.state(), RunState::Done);

        assert!(sim.step().unwrap().is_none());
        assert_eq!(sim.state(), RunState::Done);
    }

    #[test]
    fn test_single_frame_evicts_every_miss() {
        let refs = PageId::sequence(&[1, 1, 2, 1]);
        let result = run(&refs, 1, PolicyKind::Lru).unwrap();

        let faults: Vec<bool> = result.steps.iter().map(|s| s.fault).collect();
        assert_eq!(faults, vec![true, false, true, true]);
        assert_eq!(result.steps[2].evicted, Some(pid(1)));
        assert_eq!(result.steps[3].evicted, Some(pid(2)));
        assert_eq!(result.stats.evictions, 2);
    }

    #[test]
    fn test_snapshot_records_frame_state() {
        let refs = PageId::sequence(&[5, 6, 5]);
        let result = run(&refs, 3, PolicyKind::Lru).unwrap();

        let last = &result.steps[2];
        assert_eq!(last.step, 2);
        assert!(last.is_hit());
        assert_eq!(last.frame, FrameId::new(0));
        assert_eq!(last.frames, vec![Some(pid(5)), Some(pid(6)), None]);
        assert_eq!(result.final_frames(), &[Some(pid(5)), Some(pid(6)), None]);
    }

    #[test]
    fn test_incoming_page_takes_victim_frame() {
        // LRU evicts 1 (frame 0) for 3
        let refs = PageId::sequence(&[1, 2, 3]);
        let result = run(&refs, 2, PolicyKind::Lru).unwrap();

        let last = &result.steps[2];
        assert_eq!(last.evicted, Some(pid(1)));
        assert_eq!(last.frame, FrameId::new(0));
        assert_eq!(last.frames, vec![Some(pid(3)), Some(pid(2))]);
    }

    #[test]
    fn test_result_accessors() {
        let refs = PageId::sequence(&[1, 2, 1, 2]);
        let result = run(&refs, 2, PolicyKind::Optimal).unwrap();

        assert_eq!(result.policy, PolicyKind::Optimal);
        assert_eq!(result.frame_count, 2);
        assert_eq!(result.faults(), 2);
        assert_eq!(result.hits(), 2);
        assert_eq!(result.fault_rate(), 0.5);
        assert_eq!(result.references(), refs);
    }
}
