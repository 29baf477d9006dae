// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Claude-backed [`AiGateway`] implementation.
//!
//! Each operation renders a prompt from current store data, sends one
//! Messages API request, and parses the model output. Strategy-like
//! operations pass JSON through opaquely and wrap non-JSON output in a
//! fallback object; idea generation requires a well-formed JSON array
//! and fails the whole call otherwise (no partial drafts).

use async_trait::async_trait;
use serde_json::{json, Value};
use strategist_config::model::AnthropicConfig;
use strategist_core::types::{
    AnalyticsRecord, ContentItem, ContentPillar, GeneratedIdea, Platform, Profile,
};
use strategist_core::{AiGateway, StrategistError};
use tracing::info;

use crate::client::AnthropicClient;
use crate::types::{ApiMessage, MessageRequest};

/// Claude-backed AI gateway.
pub struct ClaudeStrategist {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
}

impl ClaudeStrategist {
    /// Builds the gateway from configuration.
    ///
    /// API key resolution order: `config.anthropic.api_key`, then the
    /// `ANTHROPIC_API_KEY` environment variable, then an error.
    pub fn from_config(config: &AnthropicConfig) -> Result<Self, StrategistError> {
        let api_key = crate::resolve_api_key(&config.api_key)?;
        let client = AnthropicClient::new(
            &api_key,
            &config.api_version,
            std::time::Duration::from_secs(config.request_timeout_secs),
        )?;
        info!(model = config.model.as_str(), "AI gateway configured");
        Ok(Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_client(client: AnthropicClient, model: String, max_tokens: u32) -> Self {
        Self {
            client,
            model,
            max_tokens,
        }
    }

    async fn complete(&self, prompt: String) -> Result<String, StrategistError> {
        let request = MessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage::user(prompt)],
            system: None,
            max_tokens: self.max_tokens,
        };
        let response = self.client.complete_message(&request).await?;
        Ok(response.text())
    }
}

#[async_trait]
impl AiGateway for ClaudeStrategist {
    async fn generate_strategy(
        &self,
        profile: &Profile,
        platforms: &[Platform],
        analytics: &[AnalyticsRecord],
    ) -> Result<Value, StrategistError> {
        let prompt = format!(
            "You are an AI Content Strategist. Based on the following information, \
             provide strategic content recommendations:\n\n\
             PROFILE INFORMATION:\n\
             - Mission: {}\n\
             - Goals: {}\n\
             - Vision: {}\n\
             - Niche: {}\n\
             - Target Audience: {}\n\n\
             PLATFORMS:\n{}\n\n\
             RECENT ANALYTICS DATA:\n{}\n\n\
             Please provide:\n\
             1. Content strategy recommendations based on what's working\n\
             2. Suggested content pillars\n\
             3. Optimal posting times for each platform\n\
             4. Content type recommendations\n\
             5. Hashtag strategies\n\
             6. Areas for improvement\n\n\
             Format your response as a JSON object with these keys:\n\
             strategy_recommendations, content_pillars, optimal_posting_times, \
             content_types, hashtag_strategies, improvements",
            field_or_unspecified(&profile.mission),
            field_or_unspecified(&profile.goals),
            field_or_unspecified(&profile.vision),
            field_or_unspecified(&profile.niche),
            field_or_unspecified(&profile.target_audience),
            pretty(platforms)?,
            pretty(analytics)?,
        );
        let text = self.complete(prompt).await?;
        Ok(json_or_wrapped(&text, "strategy_text"))
    }

    async fn generate_ideas(
        &self,
        pillar_name: &str,
        target_audience: &str,
        recent_performance: &[AnalyticsRecord],
    ) -> Result<Vec<GeneratedIdea>, StrategistError> {
        let prompt = format!(
            "Generate 10 creative content ideas for the content pillar \"{pillar_name}\" \
             targeting this audience: {target_audience}\n\n\
             Recent performance data to consider:\n{}\n\n\
             For each idea, provide:\n\
             - title: catchy title for the content\n\
             - description: brief description\n\n\
             Format as a JSON array of objects with exactly those keys.",
            pretty(recent_performance)?,
        );
        let text = self.complete(prompt).await?;
        parse_ideas(&text)
    }

    async fn optimize_content(
        &self,
        content: &ContentItem,
        platform_name: &str,
        analytics: &[AnalyticsRecord],
    ) -> Result<Value, StrategistError> {
        let prompt = format!(
            "Optimize this content for {platform_name} based on performance data:\n\n\
             CURRENT CONTENT:\n\
             - Type: {}\n\
             - Hook: {}\n\
             - Caption: {}\n\
             - Hashtags: {}\n\n\
             PLATFORM PERFORMANCE DATA:\n{}\n\n\
             Provide optimized versions of:\n\
             1. Hook (first line to grab attention)\n\
             2. Caption (engaging description)\n\
             3. Hashtags (relevant and trending)\n\
             4. Best posting time recommendation\n\
             5. Content format suggestions\n\n\
             Format as JSON object with these keys: hook, caption, hashtags, \
             posting_time, format_suggestions",
            content
                .content_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "Not specified".to_string()),
            text_or_unspecified(&content.hook),
            text_or_unspecified(&content.caption),
            text_or_unspecified(&content.hashtags_used),
            pretty(analytics)?,
        );
        let text = self.complete(prompt).await?;
        Ok(json_or_wrapped(&text, "optimized_content"))
    }

    async fn analyze_performance(
        &self,
        content_items: &[ContentItem],
        platform_names: &[String],
    ) -> Result<Value, StrategistError> {
        let prompt = format!(
            "Analyze this content performance data and provide insights:\n\n\
             CONTENT DATA:\n{}\n\n\
             PLATFORMS: {}\n\n\
             Provide analysis on:\n\
             1. Top performing content types\n\
             2. Best performing times/days\n\
             3. Engagement patterns\n\
             4. Hashtag effectiveness\n\
             5. Content pillar performance\n\
             6. Platform-specific insights\n\
             7. Recommendations for improvement\n\n\
             Format as JSON object with these analysis points.",
            pretty(content_items)?,
            platform_names.join(", "),
        );
        let text = self.complete(prompt).await?;
        Ok(json_or_wrapped(&text, "analysis"))
    }

    async fn weekly_plan(
        &self,
        pillars: &[ContentPillar],
        platform_names: &[String],
        goals: &str,
    ) -> Result<Value, StrategistError> {
        let prompt = format!(
            "Create a weekly content plan (7 days) based on:\n\n\
             CONTENT PILLARS:\n{}\n\n\
             PLATFORMS: {}\n\n\
             GOALS: {goals}\n\n\
             For each day, provide:\n\
             - day_name\n\
             - content_suggestions (2-3 per day)\n\
             - Each suggestion should have: title, pillar, platform, content_type, optimal_time\n\n\
             Format as JSON object with days as keys.",
            pretty(pillars)?,
            platform_names.join(", "),
        );
        let text = self.complete(prompt).await?;
        Ok(json_or_wrapped(&text, "plan"))
    }
}

fn field_or_unspecified(value: &Option<String>) -> &str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or("Not specified")
}

fn text_or_unspecified(value: &str) -> &str {
    if value.is_empty() { "Not specified" } else { value }
}

fn pretty<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, StrategistError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| StrategistError::Internal(format!("failed to render prompt context: {e}")))
}

/// Strip a leading/trailing markdown code fence, which models often wrap
/// JSON output in despite instructions.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Parse model output as JSON, wrapping plain text under `fallback_key`
/// so strategy-like responses always reach the caller.
fn json_or_wrapped(text: &str, fallback_key: &str) -> Value {
    let cleaned = strip_code_fence(text);
    serde_json::from_str(cleaned).unwrap_or_else(|_| json!({ fallback_key: text }))
}

/// Parse idea drafts. Malformed output fails the whole call: drafts are
/// all-or-nothing at the gateway boundary.
fn parse_ideas(text: &str) -> Result<Vec<GeneratedIdea>, StrategistError> {
    let cleaned = strip_code_fence(text);
    serde_json::from_str(cleaned).map_err(|e| {
        StrategistError::gateway(format!("model returned unparseable idea drafts: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn strip_code_fence_handles_fenced_and_bare_json() {
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn json_or_wrapped_falls_back_to_text() {
        let value = json_or_wrapped("not json at all", "strategy_text");
        assert_eq!(value["strategy_text"], "not json at all");

        let value = json_or_wrapped(r#"{"improvements": []}"#, "strategy_text");
        assert!(value["improvements"].is_array());
    }

    #[test]
    fn parse_ideas_accepts_extra_keys_and_rejects_non_arrays() {
        let drafts = parse_ideas(
            r#"[{"title": "A", "description": "d", "hook": "ignored"}, {"title": "B"}]"#,
        )
        .unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "A");
        assert_eq!(drafts[1].description, "");

        let err = parse_ideas("here are some ideas!").unwrap_err();
        assert!(matches!(err, StrategistError::Gateway { .. }));
    }

    fn ideas_response(body: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_ideas",
            "content": [{"type": "text", "text": body}],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 50, "output_tokens": 80}
        })
    }

    fn test_gateway(server_uri: &str) -> ClaudeStrategist {
        let client = AnthropicClient::new("k", "2023-06-01", std::time::Duration::from_secs(5))
            .unwrap()
            .with_base_url(server_uri.to_string());
        ClaudeStrategist::with_client(client, "claude-sonnet-4-20250514".into(), 1000)
    }

    #[tokio::test]
    async fn generate_ideas_returns_drafts_from_model_output() {
        let server = MockServer::start().await;
        let body = r#"```json
[{"title": "5 AM routine", "description": "morning habits"},
 {"title": "Desk stretches", "description": "for office workers"}]
```"#;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ideas_response(body)))
            .mount(&server)
            .await;

        let gateway = test_gateway(&server.uri());
        let drafts = gateway.generate_ideas("Fitness", "busy professionals", &[]).await.unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "5 AM routine");
    }

    #[tokio::test]
    async fn generate_ideas_fails_whole_call_on_malformed_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(ideas_response("Sure! Idea one: ...")),
            )
            .mount(&server)
            .await;

        let gateway = test_gateway(&server.uri());
        let err = gateway.generate_ideas("Fitness", "anyone", &[]).await.unwrap_err();
        assert!(matches!(err, StrategistError::Gateway { .. }));
    }
}
