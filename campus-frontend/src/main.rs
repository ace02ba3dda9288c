use campus_frontend::config::get_configuration;
use campus_frontend::services::metrics::init_metrics;
use campus_frontend::services::notice_client::NoticeClient;
use campus_frontend::startup::build_router;
use campus_frontend::AppState;
use service_core::observability::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(&configuration.telemetry)?;

    let metrics = init_metrics()?;
    let notice_client = Arc::new(NoticeClient::new(&configuration.notice_api));

    let app = build_router(AppState::new(notice_client, metrics));

    let address = configuration.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting campus-frontend on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
