// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/tasks` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use strategist_core::inputs::{TaskDraft, TaskPatch};
use strategist_core::Task;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(queries::tasks::list(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = queries::tasks::create(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(queries::tasks::update(&state.db, id, patch).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    queries::tasks::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
