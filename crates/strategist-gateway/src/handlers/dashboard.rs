// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/dashboard/summary` handler.

use axum::extract::State;
use axum::Json;
use strategist_core::DashboardSummary;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

pub async fn summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, ApiError> {
    Ok(Json(
        queries::dashboard::summarize(&state.db, state.recent_limit).await?,
    ))
}
