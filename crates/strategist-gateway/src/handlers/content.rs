// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/content-manager` handlers, including the publish transition and
//! the platform-association endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strategist_core::inputs::{ContentItemDraft, ContentItemPatch, PublishRequest};
use strategist_core::{de, ContentItem, StrategistError};
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContentItem>>, ApiError> {
    Ok(Json(queries::content::list(&state.db).await?))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContentItem>, ApiError> {
    let item = queries::content::get(&state.db, id)
        .await?
        .ok_or_else(|| StrategistError::not_found("content item", id))?;
    Ok(Json(item))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ContentItemDraft>,
) -> Result<(StatusCode, Json<ContentItem>), ApiError> {
    let item = queries::content::create(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ContentItemPatch>,
) -> Result<Json<ContentItem>, ApiError> {
    Ok(Json(queries::content::update(&state.db, id, patch).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    queries::content::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/content-manager/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<ContentItem>, ApiError> {
    Ok(Json(queries::content::publish(&state.db, id, request).await?))
}

/// Body of PUT /api/content-manager/{id}/platforms.
#[derive(Debug, Deserialize)]
pub struct SetPlatformsRequest {
    #[serde(default, deserialize_with = "de::id_vec")]
    pub platform_ids: Option<Vec<i64>>,
}

/// PUT /api/content-manager/{id}/platforms
///
/// Replaces the full association set; an empty or absent list clears it.
pub async fn set_platforms(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<SetPlatformsRequest>,
) -> Result<Json<ContentItem>, ApiError> {
    let ids = request.platform_ids.unwrap_or_default();
    Ok(Json(queries::content::set_platforms(&state.db, id, ids).await?))
}
