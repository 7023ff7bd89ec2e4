//! Infrastructure adapters for external systems.

pub mod dgraph;
pub mod grpc;
pub mod memory;

pub use dgraph::{DgraphClient, DgraphProjectRepository};
pub use memory::InMemoryProjectRepository;
