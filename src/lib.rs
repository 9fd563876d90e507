//! pagesim - a deterministic virtual-memory paging simulator.
//!
//! Replays a page reference string against a fixed number of physical frames
//! under a replacement policy, and reports every step plus hit/fault totals.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Workload (workload/)                        │   │
//! │  │     text / file parsing  ·  locality-based generator     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓  &[PageId]                       │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (simulation/)                    │   │
//! │  │   Simulator: Ready → Running → Done                      │   │
//! │  │   StepSnapshot · SimulationStats · compare · Session     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Memory (memory/)                            │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacement Policies: LRU | Optimal            │   │   │
//! │  │   │        (closed enum, exhaustive dispatch)       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │                       FrameSet                           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - Frame set and replacement policies
//! - [`simulation`] - Driver, snapshots, statistics
//! - [`workload`] - Reference-string sources
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, parse_references};
//!
//! let refs = parse_references("1,2,3,4,1,2,5,1,2,3,4,5").unwrap();
//! let cmp = compare(&refs, 3).unwrap();
//!
//! assert_eq!(cmp.lru.faults(), 10);
//! assert_eq!(cmp.optimal.faults(), 7);
//! ```

pub mod common;
pub mod memory;
pub mod simulation;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING};
pub use common::{
    ConfigError, Error, FrameId, PageId, ParseError, PolicyKind, Result, SimulationConfig,
};

pub use memory::{FrameSet, LruPolicy, OptimalPolicy, Policy};
pub use simulation::{
    compare, run, PolicyComparison, RunState, RunTicket, Session, SimulationRequest,
    SimulationResult, SimulationStats, Simulator, StepSnapshot,
};
pub use workload::{parse_references, read_references, WorkloadProfile};
