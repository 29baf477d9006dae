// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain entity types shared across the Strategist workspace.
//!
//! Every entity carries a server-assigned `id` and ISO 8601 UTC text
//! timestamps set by the storage layer. Enum-valued fields are closed:
//! the serde representation rejects values outside the listed sets.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// --- Closed enumerations ---

/// Workflow state of a brainstormed content idea.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdeaStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Priority shared by ideas and tasks.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Production stage of a content item.
///
/// The stages form an ordered workflow, but the order is not enforced:
/// the user may set any stage at any time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Planning,
    Scripting,
    Filming,
    Editing,
    Scheduled,
    Published,
}

/// Distribution shape of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentType {
    ShortForm,
    Carousel,
    Story,
    LongForm,
    Post,
}

/// Creative format of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentFormat {
    Fitcheck,
    Grwm,
    Cinematic,
    Trendy,
    Pov,
    Vlog,
    HeadTalk,
}

/// Completion state shared by tasks and content subtasks.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

// --- Entities ---

/// A social platform the user publishes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: i64,
    pub platform_name: String,
    pub current_followers: i64,
    pub goal_followers: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// The singleton creator profile. Created lazily on first access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub mission: Option<String>,
    pub goals: Option<String>,
    pub vision: Option<String>,
    pub niche: Option<String>,
    pub target_audience: Option<String>,
    pub stories: Option<String>,
    pub motivation: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A named strategic content theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPillar {
    pub id: i64,
    pub pillar_name: String,
    pub description: String,
    /// Comma-separated keyword list, stored verbatim.
    pub keywords: String,
    pub target_audience: String,
    pub content_frequency: String,
    pub goals: String,
    /// Hex color used by the frontend for pillar badges.
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An unproduced content concept, optionally tagged to a pillar.
///
/// `content_pillar_id` is a weak reference: the pillar may have been
/// deleted and readers must tolerate the dangling id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content_pillar_id: Option<i64>,
    pub inspiration_link: String,
    pub status: IdeaStatus,
    pub priority: Priority,
    pub created_at: String,
    pub updated_at: String,
}

/// Minimal platform projection embedded in content item responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRef {
    pub id: i64,
    pub platform_name: String,
}

/// A concrete, in-production or published piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub content_title: String,
    pub content_idea_id: Option<i64>,
    pub content_pillar_id: Option<i64>,
    pub status: ContentStatus,
    pub content_type: Option<ContentType>,
    pub content_format: Option<ContentFormat>,
    pub publish_time: Option<String>,
    pub intention: String,
    pub hook: String,
    pub caption: String,
    pub script: String,
    pub music: String,
    /// Duration in seconds.
    pub duration: Option<i64>,
    pub minutes_spent: Option<f64>,
    pub content_link: String,
    pub hashtags_used: String,
    pub notes: String,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub saves: i64,
    /// Percentage of viewers who watched the full video, in [0, 100].
    pub retention_rate: f64,
    /// Associated platforms, resolved through the junction table.
    pub platforms: Vec<PlatformRef>,
    pub created_at: String,
    pub updated_at: String,
}

/// An action item, optionally linked to a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content_id: Option<i64>,
    pub due_date: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub estimated_hours: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

/// A checklist entry owned by a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSubtask {
    pub id: i64,
    pub content_id: i64,
    pub task_title: String,
    pub status: TaskStatus,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// An append-only performance snapshot for a content item on a platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub id: i64,
    pub content_id: i64,
    pub platform_id: i64,
    /// Calendar date of the snapshot, `YYYY-MM-DD`.
    pub date_recorded: String,
    pub views: i64,
    pub likes: i64,
    pub shares: i64,
    pub comments: i64,
    pub saves: i64,
    pub retention_rate: f64,
    pub engagement_rate: f64,
    pub created_at: String,
}

/// Read-only rollup across all stores, computed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub platforms: i64,
    pub content_pillars: i64,
    pub content_ideas: i64,
    pub content_items: i64,
    pub tasks: i64,
    pub published_content: i64,
    pub pending_tasks: i64,
    pub total_views_week: i64,
    pub total_engagement_week: i64,
    pub recent_content: Vec<ContentItem>,
    pub recent_tasks: Vec<Task>,
}

/// A single idea draft returned by the AI gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIdea {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn enums_round_trip_through_serde() {
        for status in [
            ContentStatus::Planning,
            ContentStatus::Scripting,
            ContentStatus::Filming,
            ContentStatus::Editing,
            ContentStatus::Scheduled,
            ContentStatus::Published,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: ContentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn enum_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&ContentType::ShortForm).unwrap(),
            "\"short_form\""
        );
        assert_eq!(
            serde_json::to_string(&ContentFormat::HeadTalk).unwrap(),
            "\"head_talk\""
        );
    }

    #[test]
    fn enum_display_matches_serde_representation() {
        assert_eq!(ContentStatus::Published.to_string(), "published");
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(
            ContentFormat::from_str("head_talk").unwrap(),
            ContentFormat::HeadTalk
        );
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result: Result<IdeaStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn defaults_match_store_defaults() {
        assert_eq!(IdeaStatus::default(), IdeaStatus::Pending);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(ContentStatus::default(), ContentStatus::Planning);
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn generated_idea_description_defaults_empty() {
        let idea: GeneratedIdea = serde_json::from_str(r#"{"title": "5 AM routine"}"#).unwrap();
        assert_eq!(idea.title, "5 AM routine");
        assert_eq!(idea.description, "");
    }
}
