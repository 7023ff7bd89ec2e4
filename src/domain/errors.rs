//! Domain errors for the agora project registry.

use thiserror::Error;

/// Domain-level errors that can occur in the agora system.
///
/// The variants map one-to-one onto gRPC status codes at the transport
/// boundary; see the `From<DomainError> for tonic::Status` impl in the
/// gRPC adapter.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("project not found")]
    NotFound,

    #[error("project already exists")]
    AlreadyExists,

    #[error("caller is not allowed to access this resource")]
    Unauthorized,

    #[error("request header is missing or malformed")]
    InvalidHeader,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("storage backend is not available: {0}")]
    Unavailable(String),

    #[error("storage operation failed: {0}")]
    Storage(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
