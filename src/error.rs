//! Error types for shears.

/// Errors that can occur during chunking.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk budget (must be > 0).
    ///
    /// A zero budget is a caller contract violation: the packing loop could
    /// never emit a valid chunk, so construction fails fast instead.
    #[error("invalid chunk budget: {0} (must be > 0)")]
    InvalidBudget(usize),
}

/// Result type for shears operations.
pub type Result<T> = std::result::Result<T, Error>;
