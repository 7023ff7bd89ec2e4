//! Logging infrastructure
//!
//! Structured logging built on tracing: env-filtered, JSON or pretty
//! stdout output, optional daily-rotated file output behind a
//! non-blocking writer. [`Telemetry`] owns the writer guard; hold it
//! until process exit so buffered records are flushed.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::Telemetry;
