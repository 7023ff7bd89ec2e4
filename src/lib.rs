//! Agora - project registry service
//!
//! Agora registers projects on behalf of authenticated users and persists
//! them in a Dgraph instance reached through its GraphQL endpoint. The
//! service speaks gRPC and identifies the calling user by a configurable
//! request metadata key.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and repository ports
//! - **Application Layer** (`application`): use case orchestration
//! - **Adapters** (`adapters`): the Dgraph repository and the gRPC surface
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::dgraph::{DgraphClient, DgraphProjectRepository};
pub use adapters::grpc::GrpcProjectService;
pub use adapters::memory::InMemoryProjectRepository;
pub use application::ProjectService;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{Metadata, Project};
pub use domain::ports::ProjectRepository;
pub use infrastructure::config::{load_env_file, Config, ConfigError, Transport};
pub use infrastructure::logging::{LogConfig, Telemetry};
