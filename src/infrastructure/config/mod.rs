//! Configuration management infrastructure
//!
//! Environment-driven configuration using figment: programmatic defaults
//! merged with the service's environment keys, then validated as a whole
//! so an operator sees every problem at once.

pub mod loader;

pub use loader::{
    load_env_file, Config, ConfigError, ConfigIssue, Transport, ENV_AUTH_HEADER, ENV_DGRAPH_DSN,
    ENV_SERVICE_ADDR, ENV_SERVICE_NETW,
};
