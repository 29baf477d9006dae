// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/profile` handlers for the lazily-created singleton.

use axum::extract::State;
use axum::Json;
use strategist_core::inputs::ProfilePatch;
use strategist_core::Profile;
use strategist_storage::queries;

use crate::error::ApiError;
use crate::server::AppState;

pub async fn show(State(state): State<AppState>) -> Result<Json<Profile>, ApiError> {
    Ok(Json(queries::profile::get(&state.db).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(queries::profile::update(&state.db, patch).await?))
}
