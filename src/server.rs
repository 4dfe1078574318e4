//! HTTP Server
//!
//! Wires the loaded catalog into an Axum router and runs the listener.

use crate::catalog::types::Catalog;
use crate::search::handlers::handle_search;
use crate::search::query::DEFAULT_QUERY_PARAM;
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::net::TcpListener;

/// Per-process search options shared by every request.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Name of the repeated query-string parameter carrying the terms.
    pub query_param: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            query_param: DEFAULT_QUERY_PARAM.to_string(),
        }
    }
}

/// Request bookkeeping. Only used for log output.
#[derive(Debug, Default)]
pub struct RequestStats {
    requests: AtomicU64,
}

impl RequestStats {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Counts a request and returns its 1-based sequence number.
    pub fn record_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn total(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}

pub fn create_router(
    catalog: Arc<Catalog>,
    settings: SearchSettings,
    stats: Arc<RequestStats>,
) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .layer(Extension(catalog))
        .layer(Extension(Arc::new(settings)))
        .layer(Extension(stats))
}

/// Serves `app` until Ctrl+C is received.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
