//! Infrastructure layer module
//!
//! Configuration and logging. These back the startup sequence: logger
//! first, then the optional `.env` file, then typed configuration.

pub mod config;
pub mod logging;
