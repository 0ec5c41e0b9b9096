use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use signup::config::Configuration;
use signup::{BoxError, telemetry};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // export logs over OTLP only when an endpoint is set.
    let logger = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(endpoint) => Some(telemetry::setup_logging(&endpoint)?),
        Err(_) => None,
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(logger.as_ref().map(OpenTelemetryTracingBridge::new))
        .init();

    // read configuration file. let it in memory.
    let config = Configuration::default()
        .path(
            std::env::var("CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_default(),
        )
        .read()?;

    let metrics = telemetry::setup_metrics_recorder()?;
    let state = signup::initialize_state(Arc::clone(&config)).await?;

    let app = signup::app(state).route(
        "/metrics",
        get(move || std::future::ready(metrics.render())),
    );

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, name = %config.name, "server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(provider) = logger {
        if let Err(err) = provider.shutdown() {
            tracing::error!(error = ?err, "cannot flush OTLP logs");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(err) => {
            tracing::error!(error = %err, "cannot listen for shutdown signal");
            std::future::pending::<()>().await
        },
    }
}
