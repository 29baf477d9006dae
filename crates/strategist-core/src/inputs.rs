// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-request input structs: creation drafts and partial-update patches.
//!
//! Drafts carry the fields a client may supply on create; the store
//! assigns ids and timestamps. Patches use `Option` fields where absence
//! keeps the current value; nullable fields use `Option<Option<T>>` so
//! an explicit `null`/`""` clears (see [`crate::de`]). A patch `apply`
//! mutates the entity in place and re-validates the result, so an
//! invalid patch leaves nothing to write.

use serde::Deserialize;

use crate::de;
use crate::error::StrategistError;
use crate::types::{
    ContentFormat, ContentIdea, ContentItem, ContentPillar, ContentStatus, ContentSubtask,
    ContentType, IdeaStatus, Platform, Priority, Profile, Task, TaskStatus,
};
use crate::validate;

fn default_color() -> String {
    "#3B82F6".to_string()
}

// --- Platform ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformDraft {
    #[serde(default)]
    pub platform_name: String,
    #[serde(default, deserialize_with = "de::count")]
    pub current_followers: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub goal_followers: i64,
}

impl PlatformDraft {
    pub fn validate(&self) -> Result<(), StrategistError> {
        validate::non_blank("platform_name", &self.platform_name)?;
        validate::non_negative("current_followers", self.current_followers)?;
        validate::non_negative("goal_followers", self.goal_followers)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformPatch {
    #[serde(default)]
    pub platform_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub current_followers: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub goal_followers: Option<i64>,
}

impl PlatformPatch {
    pub fn apply(self, platform: &mut Platform) -> Result<(), StrategistError> {
        if let Some(name) = self.platform_name {
            platform.platform_name = name;
        }
        if let Some(v) = self.current_followers {
            platform.current_followers = v;
        }
        if let Some(v) = self.goal_followers {
            platform.goal_followers = v;
        }
        validate::non_blank("platform_name", &platform.platform_name)?;
        validate::non_negative("current_followers", platform.current_followers)?;
        validate::non_negative("goal_followers", platform.goal_followers)
    }
}

// --- Profile ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, deserialize_with = "de::patch_string")]
    pub mission: Option<Option<String>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub goals: Option<Option<String>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub vision: Option<Option<String>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub niche: Option<Option<String>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub target_audience: Option<Option<String>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub stories: Option<Option<String>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub motivation: Option<Option<String>>,
}

impl ProfilePatch {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(v) = self.mission {
            profile.mission = v;
        }
        if let Some(v) = self.goals {
            profile.goals = v;
        }
        if let Some(v) = self.vision {
            profile.vision = v;
        }
        if let Some(v) = self.niche {
            profile.niche = v;
        }
        if let Some(v) = self.target_audience {
            profile.target_audience = v;
        }
        if let Some(v) = self.stories {
            profile.stories = v;
        }
        if let Some(v) = self.motivation {
            profile.motivation = v;
        }
    }
}

// --- Content pillar ---

#[derive(Debug, Clone, Deserialize)]
pub struct PillarDraft {
    #[serde(default)]
    pub pillar_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub content_frequency: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default = "default_color")]
    pub color: String,
}

impl PillarDraft {
    pub fn validate(&self) -> Result<(), StrategistError> {
        validate::non_blank("pillar_name", &self.pillar_name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PillarPatch {
    #[serde(default)]
    pub pillar_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub content_frequency: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl PillarPatch {
    pub fn apply(self, pillar: &mut ContentPillar) -> Result<(), StrategistError> {
        if let Some(v) = self.pillar_name {
            pillar.pillar_name = v;
        }
        if let Some(v) = self.description {
            pillar.description = v;
        }
        if let Some(v) = self.keywords {
            pillar.keywords = v;
        }
        if let Some(v) = self.target_audience {
            pillar.target_audience = v;
        }
        if let Some(v) = self.content_frequency {
            pillar.content_frequency = v;
        }
        if let Some(v) = self.goals {
            pillar.goals = v;
        }
        if let Some(v) = self.color {
            pillar.color = v;
        }
        validate::non_blank("pillar_name", &pillar.pillar_name)
    }
}

// --- Content idea ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentIdeaDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub content_pillar_id: Option<i64>,
    #[serde(default)]
    pub inspiration_link: String,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<IdeaStatus>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub priority: Option<Priority>,
}

impl ContentIdeaDraft {
    pub fn validate(&self) -> Result<(), StrategistError> {
        validate::non_blank("title", &self.title)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentIdeaPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::patch_i64")]
    pub content_pillar_id: Option<Option<i64>>,
    #[serde(default)]
    pub inspiration_link: Option<String>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<IdeaStatus>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub priority: Option<Priority>,
}

impl ContentIdeaPatch {
    pub fn apply(self, idea: &mut ContentIdea) -> Result<(), StrategistError> {
        if let Some(v) = self.title {
            idea.title = v;
        }
        if let Some(v) = self.description {
            idea.description = v;
        }
        if let Some(v) = self.content_pillar_id {
            idea.content_pillar_id = v;
        }
        if let Some(v) = self.inspiration_link {
            idea.inspiration_link = v;
        }
        if let Some(v) = self.status {
            idea.status = v;
        }
        if let Some(v) = self.priority {
            idea.priority = v;
        }
        validate::non_blank("title", &idea.title)
    }
}

// --- Content item ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentItemDraft {
    #[serde(default)]
    pub content_title: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub content_idea_id: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub content_pillar_id: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<ContentStatus>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub content_type: Option<ContentType>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub content_format: Option<ContentFormat>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub publish_time: Option<String>,
    #[serde(default)]
    pub intention: String,
    #[serde(default)]
    pub hook: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub music: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub minutes_spent: Option<f64>,
    #[serde(default)]
    pub content_link: String,
    #[serde(default)]
    pub hashtags_used: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, deserialize_with = "de::count")]
    pub views: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub likes: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub comments: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub shares: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub saves: i64,
    #[serde(default, deserialize_with = "de::rate")]
    pub retention_rate: f64,
    #[serde(default, deserialize_with = "de::id_vec")]
    pub platform_ids: Option<Vec<i64>>,
}

impl ContentItemDraft {
    pub fn validate(&self) -> Result<(), StrategistError> {
        validate::non_blank("content_title", &self.content_title)?;
        validate::non_negative("views", self.views)?;
        validate::non_negative("likes", self.likes)?;
        validate::non_negative("comments", self.comments)?;
        validate::non_negative("shares", self.shares)?;
        validate::non_negative("saves", self.saves)?;
        validate::non_negative_opt("duration", self.duration.map(|d| d as f64))?;
        validate::non_negative_opt("minutes_spent", self.minutes_spent)?;
        validate::percentage("retention_rate", self.retention_rate)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentItemPatch {
    #[serde(default)]
    pub content_title: Option<String>,
    #[serde(default, deserialize_with = "de::patch_i64")]
    pub content_idea_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "de::patch_i64")]
    pub content_pillar_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<ContentStatus>,
    #[serde(default, deserialize_with = "de::patch_enum")]
    pub content_type: Option<Option<ContentType>>,
    #[serde(default, deserialize_with = "de::patch_enum")]
    pub content_format: Option<Option<ContentFormat>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub publish_time: Option<Option<String>>,
    #[serde(default)]
    pub intention: Option<String>,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub music: Option<String>,
    #[serde(default, deserialize_with = "de::patch_i64")]
    pub duration: Option<Option<i64>>,
    #[serde(default, deserialize_with = "de::patch_f64")]
    pub minutes_spent: Option<Option<f64>>,
    #[serde(default)]
    pub content_link: Option<String>,
    #[serde(default)]
    pub hashtags_used: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub views: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub likes: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub comments: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub shares: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub saves: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub retention_rate: Option<f64>,
    /// Present replaces the association set (empty list clears it);
    /// absent keeps the current set.
    #[serde(default, deserialize_with = "de::id_vec")]
    pub platform_ids: Option<Vec<i64>>,
}

impl ContentItemPatch {
    /// Applies everything except `platform_ids`, which the store handles
    /// through the junction table.
    pub fn apply(self, item: &mut ContentItem) -> Result<(), StrategistError> {
        if let Some(v) = self.content_title {
            item.content_title = v;
        }
        if let Some(v) = self.content_idea_id {
            item.content_idea_id = v;
        }
        if let Some(v) = self.content_pillar_id {
            item.content_pillar_id = v;
        }
        if let Some(v) = self.status {
            item.status = v;
        }
        if let Some(v) = self.content_type {
            item.content_type = v;
        }
        if let Some(v) = self.content_format {
            item.content_format = v;
        }
        if let Some(v) = self.publish_time {
            item.publish_time = v;
        }
        if let Some(v) = self.intention {
            item.intention = v;
        }
        if let Some(v) = self.hook {
            item.hook = v;
        }
        if let Some(v) = self.caption {
            item.caption = v;
        }
        if let Some(v) = self.script {
            item.script = v;
        }
        if let Some(v) = self.music {
            item.music = v;
        }
        if let Some(v) = self.duration {
            item.duration = v;
        }
        if let Some(v) = self.minutes_spent {
            item.minutes_spent = v;
        }
        if let Some(v) = self.content_link {
            item.content_link = v;
        }
        if let Some(v) = self.hashtags_used {
            item.hashtags_used = v;
        }
        if let Some(v) = self.notes {
            item.notes = v;
        }
        if let Some(v) = self.views {
            item.views = v;
        }
        if let Some(v) = self.likes {
            item.likes = v;
        }
        if let Some(v) = self.comments {
            item.comments = v;
        }
        if let Some(v) = self.shares {
            item.shares = v;
        }
        if let Some(v) = self.saves {
            item.saves = v;
        }
        if let Some(v) = self.retention_rate {
            item.retention_rate = v;
        }
        validate::non_blank("content_title", &item.content_title)?;
        validate::non_negative("views", item.views)?;
        validate::non_negative("likes", item.likes)?;
        validate::non_negative("comments", item.comments)?;
        validate::non_negative("shares", item.shares)?;
        validate::non_negative("saves", item.saves)?;
        validate::non_negative_opt("minutes_spent", item.minutes_spent)?;
        validate::percentage("retention_rate", item.retention_rate)
    }
}

/// Body of the publish transition. Absent fields keep current values;
/// the platform set is replaced only when `platform_ids` is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublishRequest {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub publish_time: Option<String>,
    #[serde(default)]
    pub content_link: Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub minutes_spent: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "de::id_vec")]
    pub platform_ids: Option<Vec<i64>>,
}

// --- Task ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub content_id: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub estimated_hours: Option<f64>,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), StrategistError> {
        validate::non_blank("title", &self.title)?;
        validate::non_negative_opt("estimated_hours", self.estimated_hours)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::patch_i64")]
    pub content_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub due_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "de::patch_f64")]
    pub estimated_hours: Option<Option<f64>>,
}

impl TaskPatch {
    pub fn apply(self, task: &mut Task) -> Result<(), StrategistError> {
        if let Some(v) = self.title {
            task.title = v;
        }
        if let Some(v) = self.description {
            task.description = v;
        }
        if let Some(v) = self.content_id {
            task.content_id = v;
        }
        if let Some(v) = self.due_date {
            task.due_date = v;
        }
        if let Some(v) = self.status {
            task.status = v;
        }
        if let Some(v) = self.priority {
            task.priority = v;
        }
        if let Some(v) = self.estimated_hours {
            task.estimated_hours = v;
        }
        validate::non_blank("title", &task.title)?;
        validate::non_negative_opt("estimated_hours", task.estimated_hours)
    }
}

// --- Content subtask ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubtaskDraft {
    #[serde(default)]
    pub task_title: String,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub due_date: Option<String>,
}

impl SubtaskDraft {
    pub fn validate(&self) -> Result<(), StrategistError> {
        validate::non_blank("task_title", &self.task_title)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubtaskPatch {
    #[serde(default)]
    pub task_title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_enum")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "de::patch_string")]
    pub due_date: Option<Option<String>>,
}

impl SubtaskPatch {
    pub fn apply(self, subtask: &mut ContentSubtask) -> Result<(), StrategistError> {
        if let Some(v) = self.task_title {
            subtask.task_title = v;
        }
        if let Some(v) = self.status {
            subtask.status = v;
        }
        if let Some(v) = self.due_date {
            subtask.due_date = v;
        }
        validate::non_blank("task_title", &subtask.task_title)
    }
}

// --- Analytics ---

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsDraft {
    #[serde(deserialize_with = "de::req_i64")]
    pub content_id: i64,
    #[serde(deserialize_with = "de::req_i64")]
    pub platform_id: i64,
    #[serde(default)]
    pub date_recorded: String,
    #[serde(default, deserialize_with = "de::count")]
    pub views: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub likes: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub shares: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub comments: i64,
    #[serde(default, deserialize_with = "de::count")]
    pub saves: i64,
    #[serde(default, deserialize_with = "de::rate")]
    pub retention_rate: f64,
    #[serde(default, deserialize_with = "de::rate")]
    pub engagement_rate: f64,
}

impl AnalyticsDraft {
    pub fn validate(&self) -> Result<(), StrategistError> {
        validate::non_blank("date_recorded", &self.date_recorded)?;
        validate::non_negative("views", self.views)?;
        validate::non_negative("likes", self.likes)?;
        validate::non_negative("shares", self.shares)?;
        validate::non_negative("comments", self.comments)?;
        validate::non_negative("saves", self.saves)?;
        validate::percentage("retention_rate", self.retention_rate)?;
        validate::percentage("engagement_rate", self.engagement_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_draft_rejects_blank_name() {
        let draft: PlatformDraft = serde_json::from_str(r#"{"platform_name": "  "}"#).unwrap();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn platform_draft_coerces_string_followers() {
        let draft: PlatformDraft = serde_json::from_str(
            r#"{"platform_name": "TikTok", "current_followers": "1500", "goal_followers": 10000}"#,
        )
        .unwrap();
        assert_eq!(draft.current_followers, 1500);
        assert_eq!(draft.goal_followers, 10000);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn content_item_patch_clears_pillar_with_empty_string() {
        let patch: ContentItemPatch =
            serde_json::from_str(r#"{"content_pillar_id": ""}"#).unwrap();
        assert_eq!(patch.content_pillar_id, Some(None));

        let absent: ContentItemPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.content_pillar_id, None);
    }

    #[test]
    fn content_item_patch_keeps_unmentioned_fields() {
        let mut item = sample_item();
        let patch: ContentItemPatch =
            serde_json::from_str(r#"{"hook": "new hook"}"#).unwrap();
        patch.apply(&mut item).unwrap();
        assert_eq!(item.hook, "new hook");
        assert_eq!(item.content_title, "5AM Video");
        assert_eq!(item.views, 120);
    }

    #[test]
    fn content_item_patch_rejects_out_of_range_retention() {
        let mut item = sample_item();
        let patch: ContentItemPatch =
            serde_json::from_str(r#"{"retention_rate": 140}"#).unwrap();
        assert!(patch.apply(&mut item).is_err());
    }

    #[test]
    fn task_patch_clears_due_date() {
        let mut task = Task {
            id: 1,
            title: "Edit intro".into(),
            description: String::new(),
            content_id: None,
            due_date: Some("2026-08-10T00:00:00Z".into()),
            status: TaskStatus::Pending,
            priority: Priority::Medium,
            estimated_hours: Some(2.0),
            created_at: "2026-08-01T00:00:00.000Z".into(),
            updated_at: "2026-08-01T00:00:00.000Z".into(),
        };
        let patch: TaskPatch = serde_json::from_str(r#"{"due_date": ""}"#).unwrap();
        patch.apply(&mut task).unwrap();
        assert_eq!(task.due_date, None);
        assert_eq!(task.estimated_hours, Some(2.0));
    }

    #[test]
    fn analytics_draft_requires_ids() {
        let result: Result<AnalyticsDraft, _> =
            serde_json::from_str(r#"{"date_recorded": "2026-08-01"}"#);
        assert!(result.is_err());
    }

    fn sample_item() -> ContentItem {
        ContentItem {
            id: 7,
            content_title: "5AM Video".into(),
            content_idea_id: None,
            content_pillar_id: Some(1),
            status: ContentStatus::Planning,
            content_type: Some(ContentType::ShortForm),
            content_format: None,
            publish_time: None,
            intention: String::new(),
            hook: "old hook".into(),
            caption: String::new(),
            script: String::new(),
            music: String::new(),
            duration: Some(45),
            minutes_spent: None,
            content_link: String::new(),
            hashtags_used: String::new(),
            notes: String::new(),
            views: 120,
            likes: 0,
            comments: 0,
            shares: 0,
            saves: 0,
            retention_rate: 0.0,
            platforms: Vec::new(),
            created_at: "2026-08-01T00:00:00.000Z".into(),
            updated_at: "2026-08-01T00:00:00.000Z".into(),
        }
    }
}
