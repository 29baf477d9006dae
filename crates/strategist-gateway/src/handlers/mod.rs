// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the REST API, one module per store.

pub mod ai;
pub mod analytics;
pub mod content;
pub mod dashboard;
pub mod ideas;
pub mod pillars;
pub mod platforms;
pub mod profile;
pub mod subtasks;
pub mod tasks;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::server::AppState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since process start.
    pub uptime_secs: u64,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
