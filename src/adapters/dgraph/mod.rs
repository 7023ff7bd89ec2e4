//! Dgraph adapters: a thin GraphQL-over-HTTP client and the project
//! repository built on top of it.

pub mod client;
mod models;
pub mod project_repository;

pub use client::DgraphClient;
pub use project_repository::DgraphProjectRepository;
