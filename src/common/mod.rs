//! Common types and utilities shared across the simulator.
//!
//! This module contains the fundamental primitives used throughout the codebase:
//! - Configuration (frame count, policy selector, defaults)
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::{PolicyKind, SimulationConfig};
pub use error::{ConfigError, Error, ParseError, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
