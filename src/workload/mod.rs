//! Reference-string sources.
//!
//! The simulator itself only needs a `&[PageId]`. This module produces one
//! from text, from a file, or from a synthetic locality profile.

mod generator;
mod parse;

pub use generator::{WorkloadProfile, MAX_PROFILE_PAGES};
pub use parse::{parse_references, read_references};
