// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard aggregation: a read-only rollup computed per request.
//!
//! Everything runs inside one connection call so the summary is a
//! consistent snapshot and no store is queried more than once.

use rusqlite::params;
use strategist_core::{DashboardSummary, StrategistError};

use crate::database::{map_tr_err, Database};
use crate::queries::{content, tasks};

fn count_rows(conn: &rusqlite::Connection, table: &str) -> rusqlite::Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
}

/// Compute the dashboard summary. `recent_limit` bounds the recent
/// content and task lists (most recent first by creation time).
pub async fn summarize(
    db: &Database,
    recent_limit: usize,
) -> Result<DashboardSummary, StrategistError> {
    let limit = recent_limit as i64;
    db.connection()
        .call(move |conn| {
            let platforms = count_rows(conn, "platforms")?;
            let content_pillars = count_rows(conn, "content_pillars")?;
            let content_ideas = count_rows(conn, "content_ideas")?;
            let content_items = count_rows(conn, "content_manager")?;
            let task_count = count_rows(conn, "tasks")?;

            let published_content: i64 = conn.query_row(
                "SELECT COUNT(*) FROM content_manager WHERE status = 'published'",
                [],
                |row| row.get(0),
            )?;
            let pending_tasks: i64 = conn.query_row(
                "SELECT COUNT(*) FROM tasks WHERE status = 'pending'",
                [],
                |row| row.get(0),
            )?;

            // Week rollups over the analytics ledger; engagement is
            // likes + shares + comments.
            let (total_views_week, total_engagement_week): (i64, i64) = conn.query_row(
                "SELECT COALESCE(SUM(views), 0), COALESCE(SUM(likes + shares + comments), 0)
                 FROM analytics WHERE date_recorded >= date('now', '-7 days')",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;

            let mut recent_content = Vec::new();
            {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM content_manager ORDER BY created_at DESC, id DESC LIMIT ?1",
                    content::COLUMNS
                ))?;
                let rows = stmt.query_map(params![limit], content::item_from_row)?;
                for row in rows {
                    recent_content.push(row?);
                }
            }
            for item in &mut recent_content {
                item.platforms = content::load_platforms(conn, item.id)?;
            }

            let mut recent_tasks = Vec::new();
            {
                let mut stmt = conn.prepare(
                    "SELECT id, title, description, content_id, due_date, status, priority,
                            estimated_hours, created_at, updated_at
                     FROM tasks ORDER BY created_at DESC, id DESC LIMIT ?1",
                )?;
                let rows = stmt.query_map(params![limit], tasks::task_from_row)?;
                for row in rows {
                    recent_tasks.push(row?);
                }
            }

            Ok(DashboardSummary {
                platforms,
                content_pillars,
                content_ideas,
                content_items,
                tasks: task_count,
                published_content,
                pending_tasks,
                total_views_week,
                total_engagement_week,
                recent_content,
                recent_tasks,
            })
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::{content, ideas, pillars, platforms, tasks};
    use strategist_core::inputs::{
        ContentIdeaDraft, ContentItemDraft, PillarDraft, PlatformDraft, TaskDraft,
    };
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn counts_match_live_rows() {
        let (db, _dir) = setup_db().await;

        platforms::create(
            &db,
            PlatformDraft {
                platform_name: "TikTok".into(),
                current_followers: 0,
                goal_followers: 0,
            },
        )
        .await
        .unwrap();

        let pillar: PillarDraft = serde_json::from_str(r#"{"pillar_name": "Fitness"}"#).unwrap();
        pillars::create(&db, pillar).await.unwrap();

        for title in ["a", "b", "c"] {
            let draft: ContentIdeaDraft =
                serde_json::from_str(&format!(r#"{{"title": "{title}"}}"#)).unwrap();
            ideas::create(&db, draft).await.unwrap();
        }

        let item: ContentItemDraft =
            serde_json::from_str(r#"{"content_title": "Video", "status": "published"}"#).unwrap();
        content::create(&db, item).await.unwrap();

        let task: TaskDraft = serde_json::from_str(r#"{"title": "Edit"}"#).unwrap();
        tasks::create(&db, task).await.unwrap();

        let summary = summarize(&db, 5).await.unwrap();
        assert_eq!(summary.platforms, 1);
        assert_eq!(summary.content_pillars, 1);
        assert_eq!(summary.content_ideas, 3);
        assert_eq!(summary.content_items, 1);
        assert_eq!(summary.tasks, 1);
        assert_eq!(summary.published_content, 1);
        assert_eq!(summary.pending_tasks, 1);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn recent_lists_honor_limit_and_order() {
        let (db, _dir) = setup_db().await;
        for i in 0..8 {
            let draft: ContentItemDraft =
                serde_json::from_str(&format!(r#"{{"content_title": "item-{i}"}}"#)).unwrap();
            content::create(&db, draft).await.unwrap();
        }

        let summary = summarize(&db, 5).await.unwrap();
        assert_eq!(summary.recent_content.len(), 5);
        // Creation timestamps within the test share a millisecond, so the
        // id tiebreaker carries the ordering.
        assert_eq!(summary.recent_content[0].content_title, "item-7");
        assert_eq!(summary.recent_content[4].content_title, "item-3");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn empty_database_summarizes_to_zeroes() {
        let (db, _dir) = setup_db().await;
        let summary = summarize(&db, 5).await.unwrap();
        assert_eq!(summary.platforms, 0);
        assert_eq!(summary.total_views_week, 0);
        assert!(summary.recent_content.is_empty());
        assert!(summary.recent_tasks.is_empty());
        db.close().await.unwrap();
    }
}
