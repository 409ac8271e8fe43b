use gigswipe::config::env_loader::load_config;
use gigswipe::tracing::setup_loki;
use gigswipe::web::router::{build_router, AppState};
use std::error::Error;
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let loki = setup_loki().await;

    let config = load_config();
    let address = SocketAddr::new(config.host, config.port);

    info!("Reading events from {}", config.events_file.display());

    let app = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(address).await?;

    info!("Listening on http://{}", address);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = &served {
        error!("Server stopped unexpectedly: {}", e);
    }

    if let Some(loki) = loki {
        loki.shutdown().await;
    }

    Ok(served?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed listening for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Shutting down");
}
