// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content idea store CRUD operations.

use rusqlite::params;
use strategist_core::inputs::{ContentIdeaDraft, ContentIdeaPatch};
use strategist_core::{ContentIdea, StrategistError};

use crate::database::{map_tr_err, Database};
use crate::queries::parse_enum;

const COLUMNS: &str = "id, title, description, content_pillar_id, inspiration_link, \
                       status, priority, created_at, updated_at";

fn idea_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContentIdea> {
    Ok(ContentIdea {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        content_pillar_id: row.get(3)?,
        inspiration_link: row.get(4)?,
        status: parse_enum(5, row.get(5)?)?,
        priority: parse_enum(6, row.get(6)?)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

/// List all ideas in id order.
pub async fn list(db: &Database) -> Result<Vec<ContentIdea>, StrategistError> {
    db.connection()
        .call(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {COLUMNS} FROM content_ideas ORDER BY id"))?;
            let rows = stmt.query_map([], idea_from_row)?;
            let mut ideas = Vec::new();
            for row in rows {
                ideas.push(row?);
            }
            Ok(ideas)
        })
        .await
        .map_err(map_tr_err)
}

/// Get an idea by id.
pub async fn get(db: &Database, id: i64) -> Result<Option<ContentIdea>, StrategistError> {
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_ideas WHERE id = ?1"),
                params![id],
                idea_from_row,
            );
            match result {
                Ok(idea) => Ok(Some(idea)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Create an idea. Status defaults to pending and priority to medium.
pub async fn create(db: &Database, draft: ContentIdeaDraft) -> Result<ContentIdea, StrategistError> {
    draft.validate()?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO content_ideas
                 (title, description, content_pillar_id, inspiration_link, status, priority)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    draft.title,
                    draft.description,
                    draft.content_pillar_id,
                    draft.inspiration_link,
                    draft.status.unwrap_or_default().to_string(),
                    draft.priority.unwrap_or_default().to_string(),
                ],
            )?;
            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_ideas WHERE id = ?1"),
                params![id],
                idea_from_row,
            )
        })
        .await
        .map_err(map_tr_err)
}

/// Apply a partial update and refresh `updated_at`.
pub async fn update(
    db: &Database,
    id: i64,
    patch: ContentIdeaPatch,
) -> Result<ContentIdea, StrategistError> {
    let mut idea = get(db, id)
        .await?
        .ok_or_else(|| StrategistError::not_found("content idea", id))?;
    patch.apply(&mut idea)?;

    let updated = db
        .connection()
        .call(move |conn| {
            let n = conn.execute(
                "UPDATE content_ideas SET title = ?1, description = ?2, content_pillar_id = ?3,
                 inspiration_link = ?4, status = ?5, priority = ?6,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?7",
                params![
                    idea.title,
                    idea.description,
                    idea.content_pillar_id,
                    idea.inspiration_link,
                    idea.status.to_string(),
                    idea.priority.to_string(),
                    id,
                ],
            )?;
            if n == 0 {
                return Ok(None);
            }
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_ideas WHERE id = ?1"),
                params![id],
                idea_from_row,
            )
            .map(Some)
        })
        .await
        .map_err(map_tr_err)?;

    updated.ok_or_else(|| StrategistError::not_found("content idea", id))
}

/// Delete an idea. Content items derived from it keep their dangling
/// references.
pub async fn delete(db: &Database, id: i64) -> Result<(), StrategistError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            let n = conn.execute("DELETE FROM content_ideas WHERE id = ?1", params![id])?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(StrategistError::not_found("content idea", id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategist_core::types::{IdeaStatus, Priority};
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn create_defaults_status_and_priority() {
        let (db, _dir) = setup_db().await;
        let draft: ContentIdeaDraft =
            serde_json::from_str(r#"{"title": "5 AM routine"}"#).unwrap();
        let idea = create(&db, draft).await.unwrap();
        assert_eq!(idea.status, IdeaStatus::Pending);
        assert_eq!(idea.priority, Priority::Medium);
        assert_eq!(idea.content_pillar_id, None);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn create_with_pillar_reference_round_trips() {
        let (db, _dir) = setup_db().await;
        let draft: ContentIdeaDraft = serde_json::from_str(
            r#"{"title": "Desk stretches", "content_pillar_id": "3", "status": "approved", "priority": "high"}"#,
        )
        .unwrap();
        let idea = create(&db, draft).await.unwrap();
        assert_eq!(idea.content_pillar_id, Some(3));
        assert_eq!(idea.status, IdeaStatus::Approved);
        assert_eq!(idea.priority, Priority::High);

        let fetched = get(&db, idea.id).await.unwrap().unwrap();
        assert_eq!(fetched, idea);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_can_clear_pillar_reference() {
        let (db, _dir) = setup_db().await;
        let draft: ContentIdeaDraft = serde_json::from_str(
            r#"{"title": "Desk stretches", "content_pillar_id": 3}"#,
        )
        .unwrap();
        let idea = create(&db, draft).await.unwrap();

        let patch: ContentIdeaPatch =
            serde_json::from_str(r#"{"content_pillar_id": ""}"#).unwrap();
        let updated = update(&db, idea.id, patch).await.unwrap();
        assert_eq!(updated.content_pillar_id, None);
        assert_eq!(updated.title, "Desk stretches");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_unknown_id_mutates_nothing() {
        let (db, _dir) = setup_db().await;
        let patch: ContentIdeaPatch = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        let err = update(&db, 404, patch).await.unwrap_err();
        assert!(matches!(err, StrategistError::NotFound { .. }));
        assert!(list(&db).await.unwrap().is_empty());
        db.close().await.unwrap();
    }
}
