//! HTTP server for astrod

use crate::config::Config;
use crate::routes;
use anyhow::{Context, Result};
use astro_common::{AccuracyTracker, ContentService, Dispatcher, HttpGenerator, RngSource};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
pub struct AppState {
    pub service: ContentService,
    /// Present only when tracking is enabled
    pub tracker: Option<AccuracyTracker>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(service: ContentService, tracker: Option<AccuracyTracker>) -> Self {
        Self {
            service,
            tracker,
            start_time: Instant::now(),
        }
    }

    /// Wire the HTTP generator, fallback RNG and optional tracker from config.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let generator = HttpGenerator::new(&config.ai)?;
        let service = ContentService::new(
            Dispatcher::new(Arc::new(generator)),
            RngSource::new(config.fallback.seed),
        );
        if !service.ai_configured() {
            warn!(
                "No AI credential found (set {}); serving fallback content only",
                config.ai.api_key_env
            );
        }

        let tracker = if config.tracking.enabled {
            let tracker = AccuracyTracker::open(&config.tracking.db_path)
                .await
                .context("Failed to open accuracy tracking store")?;
            Some(tracker)
        } else {
            None
        };

        Ok(Self::new(service, tracker))
    }
}

/// All routes with tracing and permissive CORS
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::content_routes())
        .merge(routes::catalogue_routes())
        .merge(routes::tracking_routes())
        .fallback(routes::not_found)
        .with_state(Arc::new(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, bind: &str) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Listening on http://{}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutting down gracefully");
}
