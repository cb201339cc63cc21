use std::time::Duration;

/// Errors from backend operations.
///
/// None of these describe an expected outcome: a duplicate key on insert is
/// reported as [`Insert::Conflict`](crate::Insert::Conflict) and a missing
/// document as `None`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The session could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The backend did not answer in time.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    /// A stored document could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The backend went away during the session.
    #[error("backend unavailable")]
    Unavailable,

    /// The session was used after being disconnected.
    #[error("session closed")]
    Closed,

    /// Any other backend-side failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
