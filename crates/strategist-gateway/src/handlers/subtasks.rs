// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content subtask checklist handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use strategist_core::inputs::{SubtaskDraft, SubtaskPatch};
use strategist_core::ContentSubtask;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

/// GET /api/content-manager/{id}/subtasks
pub async fn list(
    State(state): State<AppState>,
    Path(content_id): Path<i64>,
) -> Result<Json<Vec<ContentSubtask>>, ApiError> {
    Ok(Json(
        queries::subtasks::list_for_content(&state.db, content_id).await?,
    ))
}

/// POST /api/content-manager/{id}/subtasks
pub async fn create(
    State(state): State<AppState>,
    Path(content_id): Path<i64>,
    Json(draft): Json<SubtaskDraft>,
) -> Result<(StatusCode, Json<ContentSubtask>), ApiError> {
    let subtask = queries::subtasks::create(&state.db, content_id, draft).await?;
    Ok((StatusCode::CREATED, Json(subtask)))
}

/// PUT /api/subtasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<SubtaskPatch>,
) -> Result<Json<ContentSubtask>, ApiError> {
    Ok(Json(queries::subtasks::update(&state.db, id, patch).await?))
}

/// DELETE /api/subtasks/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    queries::subtasks::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
