// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/ai/*` handlers.
//!
//! Each handler gathers current store data for context, makes one
//! gateway round trip, and returns the result. Only idea generation
//! writes anything back.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use strategist_core::inputs::ContentIdeaDraft;
use strategist_core::types::IdeaStatus;
use strategist_core::{de, AiGateway, ContentIdea, StrategistError};
use strategist_storage::queries;
use tracing::warn;

use crate::error::ApiError;
use crate::server::AppState;

/// Analytics windows fed into the prompts, matching the dashboards the
/// strategy advice is judged against.
const STRATEGY_WINDOW_DAYS: u32 = 14;
const IDEAS_WINDOW_DAYS: u32 = 30;

fn gateway(state: &AppState) -> Result<Arc<dyn AiGateway>, ApiError> {
    state.ai.clone().ok_or_else(|| {
        ApiError(StrategistError::gateway(
            "AI gateway not configured: set anthropic.api_key",
        ))
    })
}

/// POST /api/ai/generate-strategy
pub async fn generate_strategy(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let ai = gateway(&state)?;
    let profile = queries::profile::get(&state.db).await?;
    let platforms = queries::platforms::list(&state.db).await?;
    let analytics = queries::analytics::list(&state.db, STRATEGY_WINDOW_DAYS).await?;

    let strategy = ai.generate_strategy(&profile, &platforms, &analytics).await?;
    Ok(Json(strategy))
}

/// Body of POST /api/ai/generate-ideas.
#[derive(Debug, Deserialize)]
pub struct GenerateIdeasRequest {
    #[serde(deserialize_with = "de::req_i64")]
    pub pillar_id: i64,
}

/// POST /api/ai/generate-ideas
///
/// Drafts are all-or-nothing at the gateway boundary; the follow-up
/// `create` calls into the idea store run independently, so a failure
/// partway leaves earlier rows in place.
pub async fn generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeasRequest>,
) -> Result<Json<Vec<ContentIdea>>, ApiError> {
    let ai = gateway(&state)?;
    let pillar = queries::pillars::get(&state.db, request.pillar_id)
        .await?
        .ok_or_else(|| StrategistError::not_found("content pillar", request.pillar_id))?;
    let profile = queries::profile::get(&state.db).await?;
    let target_audience = profile
        .target_audience
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "General audience".to_string());
    let recent = queries::analytics::list(&state.db, IDEAS_WINDOW_DAYS).await?;

    let drafts = ai
        .generate_ideas(&pillar.pillar_name, &target_audience, &recent)
        .await?;

    let mut created = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let idea = queries::ideas::create(
            &state.db,
            ContentIdeaDraft {
                title: draft.title,
                description: draft.description,
                content_pillar_id: Some(pillar.id),
                status: Some(IdeaStatus::Pending),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| {
            warn!(error = %e, created = created.len(), "idea batch creation stopped partway");
            e
        })?;
        created.push(idea);
    }
    Ok(Json(created))
}

/// Body of POST /api/ai/optimize-content.
#[derive(Debug, Deserialize)]
pub struct OptimizeContentRequest {
    #[serde(deserialize_with = "de::req_i64")]
    pub content_id: i64,
    /// Platform name, as shown in the platform registry.
    pub platform: String,
}

/// POST /api/ai/optimize-content
pub async fn optimize_content(
    State(state): State<AppState>,
    Json(request): Json<OptimizeContentRequest>,
) -> Result<Json<Value>, ApiError> {
    let ai = gateway(&state)?;
    let content = queries::content::get(&state.db, request.content_id)
        .await?
        .ok_or_else(|| StrategistError::not_found("content item", request.content_id))?;
    let platform = queries::platforms::get_by_name(&state.db, &request.platform)
        .await?
        .ok_or_else(|| StrategistError::validation("platform", "unknown platform name"))?;
    let analytics = queries::analytics::list_for_platform(&state.db, platform.id).await?;

    let optimized = ai
        .optimize_content(&content, &platform.platform_name, &analytics)
        .await?;
    Ok(Json(optimized))
}

/// POST /api/ai/analyze-performance
pub async fn analyze_performance(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let ai = gateway(&state)?;
    let content_items = queries::content::list(&state.db).await?;
    let platform_names: Vec<String> = queries::platforms::list(&state.db)
        .await?
        .into_iter()
        .map(|p| p.platform_name)
        .collect();

    let analysis = ai.analyze_performance(&content_items, &platform_names).await?;
    Ok(Json(analysis))
}

/// POST /api/ai/weekly-plan
pub async fn weekly_plan(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let ai = gateway(&state)?;
    let pillars = queries::pillars::list(&state.db).await?;
    let platform_names: Vec<String> = queries::platforms::list(&state.db)
        .await?
        .into_iter()
        .map(|p| p.platform_name)
        .collect();
    let profile = queries::profile::get(&state.db).await?;
    let goals = profile
        .goals
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Increase engagement and grow following".to_string());

    let plan = ai.weekly_plan(&pillars, &platform_names, &goals).await?;
    Ok(Json(plan))
}
