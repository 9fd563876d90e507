//! Simulation driver and its outputs.
//!
//! # Components
//! - [`Simulator`] / [`run`] - Replay a reference string against a frame set
//! - [`StepSnapshot`] - Immutable record of one step
//! - [`SimulationResult`] / [`SimulationStats`] - Trace plus aggregate counts
//! - [`compare`] - Run every policy over the same input
//! - [`Session`] - Last-run-wins holder for interactive front ends

mod comparison;
mod driver;
mod session;
mod snapshot;
mod stats;

pub use comparison::{compare, PolicyComparison};
pub use driver::{run, RunState, SimulationResult, Simulator};
pub use session::{RunTicket, Session, SimulationRequest};
pub use snapshot::StepSnapshot;
pub use stats::SimulationStats;
