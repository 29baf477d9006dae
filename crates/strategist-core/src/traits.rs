// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The AI gateway trait seam.
//!
//! The HTTP layer depends on this trait rather than on a concrete client
//! so tests can script responses without network access. Results other
//! than idea generation are opaque JSON passed through to the caller.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StrategistError;
use crate::types::{
    AnalyticsRecord, ContentItem, ContentPillar, GeneratedIdea, Platform, Profile,
};

/// External AI text/idea generation service.
///
/// All calls are blocking round trips bounded by the implementation's
/// configured timeout. Failures surface as [`StrategistError::Gateway`]
/// or [`StrategistError::Timeout`]; the caller may retry, the gateway
/// does not retry beyond its single transient-status retry.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Generates a content strategy from the profile, platform goals,
    /// and recent analytics.
    async fn generate_strategy(
        &self,
        profile: &Profile,
        platforms: &[Platform],
        analytics: &[AnalyticsRecord],
    ) -> Result<Value, StrategistError>;

    /// Generates idea drafts for one pillar. All-or-nothing: an error
    /// means no drafts.
    async fn generate_ideas(
        &self,
        pillar_name: &str,
        target_audience: &str,
        recent_performance: &[AnalyticsRecord],
    ) -> Result<Vec<GeneratedIdea>, StrategistError>;

    /// Suggests optimized hook/caption/hashtags for one content item on
    /// one platform.
    async fn optimize_content(
        &self,
        content: &ContentItem,
        platform_name: &str,
        analytics: &[AnalyticsRecord],
    ) -> Result<Value, StrategistError>;

    /// Analyzes performance across all content items.
    async fn analyze_performance(
        &self,
        content_items: &[ContentItem],
        platform_names: &[String],
    ) -> Result<Value, StrategistError>;

    /// Produces a 7-day content plan from pillars and goals.
    async fn weekly_plan(
        &self,
        pillars: &[ContentPillar],
        platform_names: &[String],
        goals: &str,
    ) -> Result<Value, StrategistError>;
}
