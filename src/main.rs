// Main entry point - Dependency injection and either a one-shot report or the HTTP server
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::glucose_service::GlucoseService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::sources::select_source;
use crate::presentation::app_state::AppState;
use crate::presentation::console::render_report;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_app_config()?;

    // Create source (infrastructure layer) and service (application layer)
    let source = select_source(&config.source)?;
    let glucose_service = GlucoseService::new(source);

    let Some(server) = config.server else {
        let report = glucose_service.reading_or_absent().await;
        print!("{}", render_report(&report));
        return Ok(());
    };

    let state = Arc::new(AppState { glucose_service });
    let router = build_router(state);

    let addr: SocketAddr = server.bind.parse()?;
    tracing::info!("Starting glucose-snapshot service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
