//! Process-wide logger construction.
//!
//! [`Telemetry::init`] builds and installs the global subscriber and
//! returns a handle owning the non-blocking writer guard. The handle must
//! stay alive for the life of `main`: dropping it flushes any buffered
//! records, which is what guarantees no log loss on clean shutdown.

use std::io;

use anyhow::{Context, Result};
use tracing::{warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::config::LogConfig;

/// Handle over the process-wide logger.
#[derive(Debug)]
pub struct Telemetry {
    _guard: Option<WorkerGuard>,
}

impl Telemetry {
    /// Build and install the global subscriber described by `config`.
    ///
    /// On failure nothing useful has been installed and the caller decides
    /// between aborting startup and [`Telemetry::fallback`].
    pub fn init(config: &LogConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.level)?;

        // RUST_LOG still wins over the configured default level.
        let env_filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let guard = if let Some(log_dir) = &config.log_dir {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("agora")
                .filename_suffix("log")
                .build(log_dir)
                .with_context(|| {
                    format!("creating log file appender in {}", log_dir.display())
                })?;
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            // File output is always JSON for structured ingestion.
            let file_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_ansi(false)
                .with_target(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(stdout_layer(&config.format)?)
                .try_init()
                .context("installing global subscriber")?;

            Some(guard)
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer(&config.format)?)
                .try_init()
                .context("installing global subscriber")?;

            None
        };

        tracing::info!(
            level = %config.level,
            format = %config.format,
            file_output = config.log_dir.is_some(),
            "logger initialized"
        );

        Ok(Self { _guard: guard })
    }

    /// Minimal stderr logger used when [`Telemetry::init`] fails.
    ///
    /// The construction error is recorded through the fallback itself, so
    /// it is surfaced rather than discarded.
    pub fn fallback(reason: &anyhow::Error) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .finish();

        // init may have failed after a subscriber was already installed;
        // in that case keep whatever is there.
        let _ = tracing::subscriber::set_global_default(subscriber);

        warn!(error = %reason, "structured logger unavailable, falling back to stderr");
        Self { _guard: None }
    }
}

/// Select the stdout layer matching the configured format.
fn stdout_layer<S>(format: &str) -> Result<Box<dyn Layer<S> + Send + Sync + 'static>>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        "json" => Ok(tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()),
        "pretty" => Ok(tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .boxed()),
        other => anyhow::bail!("invalid log format: {other}, expected json or pretty"),
    }
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("invalid log level: {level}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("trace"), Ok(Level::TRACE)));
        assert!(matches!(parse_log_level("debug"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("warn"), Ok(Level::WARN)));
        assert!(matches!(parse_log_level("error"), Ok(Level::ERROR)));
        assert!(matches!(parse_log_level("WARN"), Ok(Level::WARN)));
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_stdout_layer_rejects_unknown_format() {
        let result = stdout_layer::<tracing_subscriber::Registry>("xml");
        assert!(result.is_err());
    }

    // Installing the global subscriber is covered by the integration
    // tests, which run in their own processes.
}
