//! # Receipt API
//!
//! HTTP server that scores purchase receipts.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Routes                              │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌────────────────────────────────────┐  │
//! │  │  POST /receipts/process  │  │  GET /receipts/{id}/points         │  │
//! │  │                          │  │                                    │  │
//! │  │ • validate               │  │ • parse id                         │  │
//! │  │ • score                  │  │ • look up stored points            │  │
//! │  │ • store, return id       │  │                                    │  │
//! │  └──────────────────────────┘  └────────────────────────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────────────┐                                          │
//! │  │  GET /health             │                                          │
//! │  └──────────────────────────┘                                          │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  AppState                                                        │  │
//! │  │  └── ReceiptStore  (RwLock<HashMap<ReceiptId, StoredReceipt>>)   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_BIND_ADDR` - Interface to bind (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log filter (default: `info,receipt=debug`)

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use receipt_store::ReceiptStore;
use tokio::net::TcpListener;
use tracing::info;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};

/// Shared application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: ReceiptStore,
}

impl AppState {
    /// Creates state with an empty store.
    pub fn new() -> Self {
        AppState::default()
    }
}

/// Builds the router with every endpoint.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(routes::receipts::process_receipt))
        .route("/receipts/{id}/points", get(routes::receipts::get_points))
        .route("/health", get(routes::health::health_handler))
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "Receipt API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
