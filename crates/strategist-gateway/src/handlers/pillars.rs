// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/content-pillars` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use strategist_core::inputs::{PillarDraft, PillarPatch};
use strategist_core::ContentPillar;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContentPillar>>, ApiError> {
    Ok(Json(queries::pillars::list(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PillarDraft>,
) -> Result<(StatusCode, Json<ContentPillar>), ApiError> {
    let pillar = queries::pillars::create(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(pillar)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PillarPatch>,
) -> Result<Json<ContentPillar>, ApiError> {
    Ok(Json(queries::pillars::update(&state.db, id, patch).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    queries::pillars::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
