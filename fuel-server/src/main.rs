use std::net::SocketAddr;

use fuel_server::bencina::{BencinaClient, BencinaConfig};
use fuel_server::finder::FinderConfig;
use fuel_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Address to listen on when `FUEL_BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Bind address
    let addr: SocketAddr = match std::env::var("FUEL_BIND_ADDR") {
        Ok(addr) => addr.parse()?,
        Err(_) => DEFAULT_BIND_ADDR.parse()?,
    };

    // Create Bencina client
    let mut bencina_config = BencinaConfig::new();
    if let Ok(base_url) = std::env::var("BENCINA_BASE_URL") {
        warn!(%base_url, "using non-default Bencina base URL");
        bencina_config = bencina_config.with_base_url(base_url);
    }
    let bencina = BencinaClient::new(bencina_config)?;

    // Build app state
    let state = AppState::new(bencina, FinderConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Fuel station finder listening on http://{addr}");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/stations/search  - Find a station");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("received shutdown signal, starting graceful shutdown");
}
