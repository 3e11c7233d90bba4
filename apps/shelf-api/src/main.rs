//! # Shelf API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Startup / Shutdown                               │
//! │                                                                         │
//! │  load config ─► open pool + bootstrap table ─► bind ─► serve           │
//! │                                                          │              │
//! │                        Ctrl+C / SIGTERM ◄────────────────┘              │
//! │                                │                                        │
//! │                                ▼                                        │
//! │              drain in-flight requests ─► close pool                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::info;

use shelf_api::{create_router, init_tracing, ApiConfig, AppState};
use shelf_db::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Shelf API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        addr = %config.bind_address(),
        database = %config.database_path.display(),
        "Configuration loaded"
    );

    // Connect to database (bootstraps the product table)
    let db = Database::new(config.db_config()).await?;

    // Create shared state
    let state = AppState::new(db.clone()).with_default_list_limit(config.default_list_limit);
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
