//! Customer service entry-point: loads settings, installs tracing, and runs
//! the HTTP server.

mod server;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use customer_service::config::AppSettings;
use customer_service::inbound::http::health::HealthState;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server, drain};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let validation = settings
        .validation_config()
        .map_err(std::io::Error::other)?;
    let config =
        ServerConfig::new(bind_addr, validation).with_demo_data(settings.seed_demo_data);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            warn!(error = %e, "shutdown signal listener failed");
            return;
        }
        drain(handle, health_state).await;
    });
    server.await
}

/// Resolves on Ctrl-C or SIGTERM.
#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

/// Resolves on Ctrl-C.
#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
