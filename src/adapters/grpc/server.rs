//! Transport-aware gRPC server loop.
//!
//! Binds according to the configured transport (`tcp` or `unix`),
//! registers the standard gRPC health service next to the project API
//! and shuts down gracefully on SIGINT.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tonic::transport::server::Router;
use tonic::transport::Server;
use tracing::info;

use crate::domain::ports::ProjectRepository;
use crate::infrastructure::config::{Config, Transport};

use super::proto::project_server::ProjectServer;
use super::GrpcProjectService;

/// Serve the project API until a shutdown signal arrives.
pub async fn serve<R: ProjectRepository + 'static>(
    service: GrpcProjectService<R>,
    config: &Config,
) -> Result<()> {
    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<ProjectServer<GrpcProjectService<R>>>()
        .await;

    let router = Server::builder()
        .trace_fn(|_| tracing::info_span!("agora"))
        .add_service(health_service)
        .add_service(ProjectServer::new(service));

    match config.transport {
        Transport::Tcp => {
            let addr: SocketAddr = config
                .service_addr
                .parse()
                .with_context(|| format!("parsing listen address {}", config.service_addr))?;

            info!(%addr, "server listening");
            router
                .serve_with_shutdown(addr, shutdown_signal())
                .await
                .context("serving gRPC over tcp")?;
        }
        Transport::Unix => serve_unix(router, &config.service_addr).await?,
    }

    info!("server stopped");
    Ok(())
}

#[cfg(unix)]
async fn serve_unix(router: Router, path: &str) -> Result<()> {
    use tokio::net::UnixListener;
    use tokio_stream::wrappers::UnixListenerStream;

    // A previous run may have left its socket file behind.
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("removing stale socket {path}"));
        }
    }

    let listener =
        UnixListener::bind(path).with_context(|| format!("binding unix socket {path}"))?;

    info!(socket = path, "server listening");
    router
        .serve_with_incoming_shutdown(UnixListenerStream::new(listener), shutdown_signal())
        .await
        .context("serving gRPC over unix socket")?;
    Ok(())
}

#[cfg(not(unix))]
async fn serve_unix(_router: Router, _path: &str) -> Result<()> {
    anyhow::bail!("unix transport is only supported on unix platforms")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
