use thiserror::Error;

/// Failure of a page store operation.
///
/// Only unexpected conditions become errors. A lost write race and a missing
/// page are ordinary results. Backend details are logged where the failure
/// happens and never cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("internal service error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
