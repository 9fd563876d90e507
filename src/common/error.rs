//! Error types for the simulator.

use thiserror::Error;

use super::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// `Config` and `Parse` are user-facing and are raised before any step runs.
/// `Capacity`, `NotResident` and `AlreadyResident` mean a frame set was used
/// against its contract; they indicate a bug, never bad input.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid simulation parameters.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A page was loaded into a frame set with no empty frame.
    ///
    /// The caller must evict a victim first.
    #[error("cannot load {page}: all {capacity} frames are occupied")]
    Capacity { page: PageId, capacity: usize },

    /// Attempted to evict a page that isn't resident.
    #[error("{0} is not resident")]
    NotResident(PageId),

    /// Attempted to load a page that already occupies a frame.
    #[error("{0} is already resident")]
    AlreadyResident(PageId),

    /// Malformed reference string.
    #[error("invalid reference string: {0}")]
    Parse(#[from] ParseError),

    /// I/O error while reading a reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Frame count below one.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// Nothing to simulate.
    #[error("reference sequence is empty")]
    EmptySequence,
}

/// Rejected reference-string token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that isn't a non-negative integer. `position` is 1-based.
    #[error("token {position} ({token:?}) is not a page number")]
    InvalidToken { position: usize, token: String },
}

impl Error {
    /// Whether the error is an internal invariant violation rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Error::Capacity { .. } | Error::NotResident(_) | Error::AlreadyResident(_)
        )
    }
}
