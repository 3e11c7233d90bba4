//! # Shelf API
//!
//! HTTP server for the product catalogue.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shelf API Layers                                │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Router (router.rs)                                              │  │
//! │  │  TraceLayer → CorsLayer::permissive() → routes                   │  │
//! │  └───────────────────────────────┬──────────────────────────────────┘  │
//! │                                  ▼                                      │
//! │  ┌────────────────┐  ┌────────────────────────┐  ┌──────────────────┐  │
//! │  │  DbSession     │  │  Handlers              │  │  ApiError        │  │
//! │  │  (state.rs)    │─►│  • create / list       │─►│  (error.rs)      │  │
//! │  │  one per req   │  │  • get / update        │  │  code → status   │  │
//! │  │                │  │  • delete / health     │  │                  │  │
//! │  └────────────────┘  └────────────────────────┘  └──────────────────┘  │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                     shelf-db (ProductRepository)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables are documented in [`config`]. Log filtering uses
//! `RUST_LOG`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use router::create_router;
pub use state::{AppState, DbSession};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelf=trace` - Show trace for shelf crates only
/// - Default: INFO, with debug for shelf crates and request traces
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shelf=debug,tower_http=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
