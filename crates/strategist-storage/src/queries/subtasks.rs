// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content subtask checklist, owned by content items.

use rusqlite::params;
use strategist_core::inputs::{SubtaskDraft, SubtaskPatch};
use strategist_core::{ContentSubtask, StrategistError};

use crate::database::{map_tr_err, Database};
use crate::queries::parse_enum;

const COLUMNS: &str = "id, content_id, task_title, status, due_date, created_at, updated_at";

fn subtask_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContentSubtask> {
    Ok(ContentSubtask {
        id: row.get(0)?,
        content_id: row.get(1)?,
        task_title: row.get(2)?,
        status: parse_enum(3, row.get(3)?)?,
        due_date: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// List the checklist for one content item, in id order.
pub async fn list_for_content(
    db: &Database,
    content_id: i64,
) -> Result<Vec<ContentSubtask>, StrategistError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM content_subtasks WHERE content_id = ?1 ORDER BY id"
            ))?;
            let rows = stmt.query_map(params![content_id], subtask_from_row)?;
            let mut subtasks = Vec::new();
            for row in rows {
                subtasks.push(row?);
            }
            Ok(subtasks)
        })
        .await
        .map_err(map_tr_err)
}

enum CreateOutcome {
    Created(ContentSubtask),
    MissingContent,
}

/// Create a subtask under an existing content item.
pub async fn create(
    db: &Database,
    content_id: i64,
    draft: SubtaskDraft,
) -> Result<ContentSubtask, StrategistError> {
    draft.validate()?;
    let outcome = db
        .connection()
        .call(move |conn| {
            // Subtasks are owned, not weakly referenced: the parent must exist.
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM content_manager WHERE id = ?1)",
                params![content_id],
                |row| row.get(0),
            )?;
            if !exists {
                return Ok(CreateOutcome::MissingContent);
            }
            conn.execute(
                "INSERT INTO content_subtasks (content_id, task_title, status, due_date)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    content_id,
                    draft.task_title,
                    draft.status.unwrap_or_default().to_string(),
                    draft.due_date,
                ],
            )?;
            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_subtasks WHERE id = ?1"),
                params![id],
                subtask_from_row,
            )
            .map(CreateOutcome::Created)
        })
        .await
        .map_err(map_tr_err)?;

    match outcome {
        CreateOutcome::Created(subtask) => Ok(subtask),
        CreateOutcome::MissingContent => {
            Err(StrategistError::not_found("content item", content_id))
        }
    }
}

/// Apply a partial update and refresh `updated_at`.
pub async fn update(
    db: &Database,
    id: i64,
    patch: SubtaskPatch,
) -> Result<ContentSubtask, StrategistError> {
    let current = db
        .connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_subtasks WHERE id = ?1"),
                params![id],
                subtask_from_row,
            );
            match result {
                Ok(subtask) => Ok(Some(subtask)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)?;

    let mut subtask = current.ok_or_else(|| StrategistError::not_found("content subtask", id))?;
    patch.apply(&mut subtask)?;

    let updated = db
        .connection()
        .call(move |conn| {
            let n = conn.execute(
                "UPDATE content_subtasks SET task_title = ?1, status = ?2, due_date = ?3,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?4",
                params![
                    subtask.task_title,
                    subtask.status.to_string(),
                    subtask.due_date,
                    id
                ],
            )?;
            if n == 0 {
                return Ok(None);
            }
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_subtasks WHERE id = ?1"),
                params![id],
                subtask_from_row,
            )
            .map(Some)
        })
        .await
        .map_err(map_tr_err)?;

    updated.ok_or_else(|| StrategistError::not_found("content subtask", id))
}

/// Delete a subtask.
pub async fn delete(db: &Database, id: i64) -> Result<(), StrategistError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            let n = conn.execute("DELETE FROM content_subtasks WHERE id = ?1", params![id])?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(StrategistError::not_found("content subtask", id));
    }
    Ok(())
}
