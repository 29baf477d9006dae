// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/content-ideas` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use strategist_core::inputs::{ContentIdeaDraft, ContentIdeaPatch};
use strategist_core::ContentIdea;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContentIdea>>, ApiError> {
    Ok(Json(queries::ideas::list(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ContentIdeaDraft>,
) -> Result<(StatusCode, Json<ContentIdea>), ApiError> {
    let idea = queries::ideas::create(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(idea)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ContentIdeaPatch>,
) -> Result<Json<ContentIdea>, ApiError> {
    Ok(Json(queries::ideas::update(&state.db, id, patch).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    queries::ideas::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
