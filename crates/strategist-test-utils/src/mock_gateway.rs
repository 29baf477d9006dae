// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock AI gateway for deterministic testing.
//!
//! `MockGateway` implements `AiGateway` with pre-configured responses,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use strategist_core::types::{
    AnalyticsRecord, ContentItem, ContentPillar, GeneratedIdea, Platform, Profile,
};
use strategist_core::{AiGateway, StrategistError};

/// A mock AI gateway that returns pre-configured responses.
///
/// Idea drafts and opaque JSON values are popped from FIFO queues; empty
/// queues yield a default. `fail_next` makes the next call return a
/// gateway error instead, for failure-path tests.
pub struct MockGateway {
    ideas: Arc<Mutex<VecDeque<Vec<GeneratedIdea>>>>,
    values: Arc<Mutex<VecDeque<Value>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockGateway {
    /// Create a mock gateway with empty response queues.
    pub fn new() -> Self {
        Self {
            ideas: Arc::new(Mutex::new(VecDeque::new())),
            values: Arc::new(Mutex::new(VecDeque::new())),
            fail_next: Arc::new(Mutex::new(false)),
        }
    }

    /// Queue a batch of idea drafts for the next `generate_ideas` call.
    pub async fn push_ideas(&self, drafts: Vec<GeneratedIdea>) {
        self.ideas.lock().await.push_back(drafts);
    }

    /// Queue an opaque value for the next strategy-like call.
    pub async fn push_value(&self, value: Value) {
        self.values.lock().await.push_back(value);
    }

    /// Make the next call fail with a gateway error.
    pub async fn fail_next(&self) {
        *self.fail_next.lock().await = true;
    }

    async fn take_failure(&self) -> Result<(), StrategistError> {
        let mut flag = self.fail_next.lock().await;
        if *flag {
            *flag = false;
            return Err(StrategistError::gateway("mock gateway failure"));
        }
        Ok(())
    }

    async fn next_value(&self, default_key: &str) -> Value {
        self.values
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| json!({ default_key: "mock response" }))
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiGateway for MockGateway {
    async fn generate_strategy(
        &self,
        _profile: &Profile,
        _platforms: &[Platform],
        _analytics: &[AnalyticsRecord],
    ) -> Result<Value, StrategistError> {
        self.take_failure().await?;
        Ok(self.next_value("strategy_text").await)
    }

    async fn generate_ideas(
        &self,
        _pillar_name: &str,
        _target_audience: &str,
        _recent_performance: &[AnalyticsRecord],
    ) -> Result<Vec<GeneratedIdea>, StrategistError> {
        self.take_failure().await?;
        Ok(self.ideas.lock().await.pop_front().unwrap_or_default())
    }

    async fn optimize_content(
        &self,
        _content: &ContentItem,
        _platform_name: &str,
        _analytics: &[AnalyticsRecord],
    ) -> Result<Value, StrategistError> {
        self.take_failure().await?;
        Ok(self.next_value("optimized_content").await)
    }

    async fn analyze_performance(
        &self,
        _content_items: &[ContentItem],
        _platform_names: &[String],
    ) -> Result<Value, StrategistError> {
        self.take_failure().await?;
        Ok(self.next_value("analysis").await)
    }

    async fn weekly_plan(
        &self,
        _pillars: &[ContentPillar],
        _platform_names: &[String],
        _goals: &str,
    ) -> Result<Value, StrategistError> {
        self.take_failure().await?;
        Ok(self.next_value("plan").await)
    }
}
