//! Last-run-wins result holder.
//!
//! An interactive front end may start a new run before the previous one
//! finishes. [`Session`] keeps only the result of the most recently started
//! run; anything older that completes late is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::common::{ConfigError, PageId, Result, SimulationConfig};
use crate::simulation::{SimulationResult, Simulator};

/// Owned inputs of one run, so it can move to a worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    pub references: Vec<PageId>,
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Create a new request.
    pub fn new(references: Vec<PageId>, config: SimulationConfig) -> Self {
        Self { references, config }
    }

    /// Check the frame count and that there is at least one reference.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for the same inputs [`Simulator::new`] rejects.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        if self.references.is_empty() {
            return Err(ConfigError::EmptySequence.into());
        }
        Ok(())
    }

    /// Run the simulation synchronously.
    pub fn execute(&self) -> Result<SimulationResult> {
        Simulator::new(&self.references, self.config)?.finish()
    }
}

/// Identifies one started run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunTicket(u64);

impl RunTicket {
    /// Generation number; later runs have larger numbers.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Holds the result of the latest run.
///
/// # Thread Safety
/// - `generation`: `AtomicU64`, bumped once per started run
/// - `latest`: `Mutex`, the generation check and the store happen under it
///
/// Runs never share frame sets or policy state; the session only stores
/// finished, immutable results.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use pagesim::{PageId, Session, SimulationConfig, SimulationRequest};
///
/// let session = Arc::new(Session::new());
/// let request = SimulationRequest::new(PageId::sequence(&[1, 2, 1]), SimulationConfig::default());
///
/// let published = session.spawn(request).unwrap().join().unwrap().unwrap();
/// assert!(published);
/// assert_eq!(session.latest().unwrap().faults(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    /// Generation of the most recently started run.
    generation: AtomicU64,

    /// Published result and the generation that produced it.
    latest: Mutex<Option<(RunTicket, Arc<SimulationResult>)>>,
}

impl Session {
    /// Create a session with no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run. Every earlier ticket becomes stale.
    pub fn begin(&self) -> RunTicket {
        RunTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recently started run.
    pub fn is_current(&self, ticket: RunTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Store `result` if `ticket` is still current.
    ///
    /// Returns `false` if a newer run has begun; the result is dropped.
    pub fn publish(&self, ticket: RunTicket, result: SimulationResult) -> bool {
        let mut latest = self.latest.lock();
        if !self.is_current(ticket) {
            debug!("discarding stale result of run {}", ticket.0);
            return false;
        }
        *latest = Some((ticket, Arc::new(result)));
        true
    }

    /// Latest published result.
    pub fn latest(&self) -> Option<Arc<SimulationResult>> {
        self.latest.lock().as_ref().map(|(_, result)| Arc::clone(result))
    }

    /// Ticket of the latest published result.
    pub fn latest_ticket(&self) -> Option<RunTicket> {
        self.latest.lock().as_ref().map(|(ticket, _)| *ticket)
    }

    /// Run `request` on a worker thread and publish its result.
    ///
    /// The handle yields whether the result was published.
    ///
    /// # Errors
    /// An invalid request is rejected before a ticket is taken, so the run in
    /// flight stays current and the previous result stays in place.
    pub fn spawn(
        self: &Arc<Self>,
        request: SimulationRequest,
    ) -> Result<JoinHandle<Result<bool>>> {
        request.validate()?;
        let ticket = self.begin();
        let session = Arc::clone(self);

        Ok(thread::spawn(move || {
            let result = request.execute()?;
            Ok(session.publish(ticket, result))
        }))
    }
}
