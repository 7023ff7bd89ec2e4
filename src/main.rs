//! Agora service entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use agora::adapters::grpc;
use agora::{
    Config, DgraphClient, DgraphProjectRepository, GrpcProjectService, LogConfig, ProjectService,
    Telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logger first: everything after this point, including the dotenv
    // warning, goes through it. The handle is held until exit so buffered
    // records are flushed on shutdown.
    let _telemetry = match Telemetry::init(&LogConfig::from_env()) {
        Ok(telemetry) => telemetry,
        Err(err) => Telemetry::fallback(&err),
    };

    agora::load_env_file();

    let config = Config::from_env().context("loading service configuration")?;

    let dgraph = DgraphClient::new(&config.dgraph_dsn);
    dgraph
        .health()
        .await
        .context("establishing connection with dgraph cluster")?;
    info!("connection with dgraph cluster established");

    let repository = Arc::new(DgraphProjectRepository::new(dgraph));
    let service = GrpcProjectService::new(
        ProjectService::new(repository),
        config.auth_header.clone(),
    );

    grpc::serve(service, &config).await
}
