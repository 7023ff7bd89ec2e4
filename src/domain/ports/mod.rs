//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that infrastructure
//! adapters must implement. The only port agora needs is the project
//! repository; it allows the application layer to stay independent of
//! the Dgraph backend.

pub mod project_repository;

pub use project_repository::ProjectRepository;
