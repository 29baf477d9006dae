// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/analytics` handlers for the append-only ledger.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strategist_core::inputs::AnalyticsDraft;
use strategist_core::AnalyticsRecord;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

/// Query string for GET /api/analytics.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Trailing day window on `date_recorded`; defaults to one week.
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    7
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AnalyticsRecord>>, ApiError> {
    Ok(Json(queries::analytics::list(&state.db, query.days).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<AnalyticsDraft>,
) -> Result<(StatusCode, Json<AnalyticsRecord>), ApiError> {
    let record = queries::analytics::create(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    queries::analytics::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
