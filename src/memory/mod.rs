//! Physical memory model.
//!
//! # Components
//! - [`FrameSet`] - Fixed pool of frames and the pages resident in them
//! - [`policy`] - Replacement policies that choose a victim under pressure

mod frame_set;
pub mod policy;

pub use frame_set::FrameSet;
pub use policy::{LruPolicy, OptimalPolicy, Policy};
