//! gRPC adapters: generated protocol types, request-header handling and
//! the transport-aware server loop.

pub mod project_service;
pub mod server;

pub use project_service::GrpcProjectService;
pub use server::serve;

use tonic::{Request, Status};
use tracing::warn;

use crate::domain::errors::DomainError;

/// Generated protocol types for the `project` package.
pub mod proto {
    #![allow(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
    tonic::include_proto!("project");
}

impl From<DomainError> for Status {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::NotFound => Self::not_found(value.to_string()),
            DomainError::AlreadyExists => Self::already_exists(value.to_string()),
            DomainError::Unauthorized => Self::permission_denied(value.to_string()),
            DomainError::InvalidHeader | DomainError::Validation(_) => {
                Self::invalid_argument(value.to_string())
            }
            DomainError::Unavailable(_) => Self::unavailable(value.to_string()),
            DomainError::Storage(_) => Self::unknown(value.to_string()),
        }
    }
}

/// Given a gRPC request, returns the value of the provided metadata key,
/// or the status to answer with when it is absent or malformed.
pub fn get_header<T>(req: &Request<T>, header: &str) -> Result<String, Status> {
    let value = req
        .metadata()
        .get(header)
        .ok_or_else(|| Status::from(DomainError::Unauthorized))?;

    value.to_str().map(ToString::to_string).map_err(|err| {
        warn!(header, error = %err, "parsing header data to str");
        DomainError::InvalidHeader.into()
    })
}
