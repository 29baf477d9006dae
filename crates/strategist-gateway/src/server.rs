// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. There is no
//! authentication layer: the application serves a single implicit user.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use strategist_core::{AiGateway, StrategistError};
use strategist_storage::Database;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single-writer database handle.
    pub db: Arc<Database>,
    /// AI gateway, absent when no API key is configured. Only the
    /// `/api/ai/*` routes need it.
    pub ai: Option<Arc<dyn AiGateway>>,
    /// Recent-list bound for the dashboard summary.
    pub recent_limit: usize,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

/// Gateway server configuration (mirrors ServerConfig from strategist-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/platforms",
            get(handlers::platforms::list).post(handlers::platforms::create),
        )
        .route(
            "/platforms/{id}",
            put(handlers::platforms::update).delete(handlers::platforms::remove),
        )
        .route(
            "/profile",
            get(handlers::profile::show).put(handlers::profile::update),
        )
        .route(
            "/content-pillars",
            get(handlers::pillars::list).post(handlers::pillars::create),
        )
        .route(
            "/content-pillars/{id}",
            put(handlers::pillars::update).delete(handlers::pillars::remove),
        )
        .route(
            "/content-ideas",
            get(handlers::ideas::list).post(handlers::ideas::create),
        )
        .route(
            "/content-ideas/{id}",
            put(handlers::ideas::update).delete(handlers::ideas::remove),
        )
        .route(
            "/content-manager",
            get(handlers::content::list).post(handlers::content::create),
        )
        .route(
            "/content-manager/{id}",
            get(handlers::content::show)
                .put(handlers::content::update)
                .delete(handlers::content::remove),
        )
        .route(
            "/content-manager/{id}/publish",
            post(handlers::content::publish),
        )
        .route(
            "/content-manager/{id}/platforms",
            put(handlers::content::set_platforms),
        )
        .route(
            "/content-manager/{id}/subtasks",
            get(handlers::subtasks::list).post(handlers::subtasks::create),
        )
        .route(
            "/subtasks/{id}",
            put(handlers::subtasks::update).delete(handlers::subtasks::remove),
        )
        .route(
            "/tasks",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route(
            "/tasks/{id}",
            put(handlers::tasks::update).delete(handlers::tasks::remove),
        )
        .route(
            "/analytics",
            get(handlers::analytics::list).post(handlers::analytics::create),
        )
        .route("/analytics/{id}", delete(handlers::analytics::remove))
        .route("/dashboard/summary", get(handlers::dashboard::summary))
        .route("/ai/generate-strategy", post(handlers::ai::generate_strategy))
        .route("/ai/generate-ideas", post(handlers::ai::generate_ideas))
        .route("/ai/optimize-content", post(handlers::ai::optimize_content))
        .route(
            "/ai/analyze-performance",
            post(handlers::ai::analyze_performance),
        )
        .route("/ai/weekly-plan", post(handlers::ai::weekly_plan));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .with_state(state)
        // The original deployment served a browser frontend from another
        // origin, so CORS stays permissive.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the gateway HTTP server and serve until shutdown (ctrl-c).
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), StrategistError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| StrategistError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StrategistError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install ctrl-c handler; serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_debug() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8700,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
    }
}
