// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/platforms` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use strategist_core::inputs::{PlatformDraft, PlatformPatch};
use strategist_core::Platform;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Platform>>, ApiError> {
    Ok(Json(queries::platforms::list(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PlatformDraft>,
) -> Result<(StatusCode, Json<Platform>), ApiError> {
    let platform = queries::platforms::create(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(platform)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PlatformPatch>,
) -> Result<Json<Platform>, ApiError> {
    Ok(Json(queries::platforms::update(&state.db, id, patch).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    queries::platforms::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
