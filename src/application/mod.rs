//! Application layer: use-case orchestration on top of the domain ports.

pub mod project_service;

pub use project_service::ProjectService;
