// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task store CRUD operations.

use rusqlite::params;
use strategist_core::inputs::{TaskDraft, TaskPatch};
use strategist_core::{StrategistError, Task};

use crate::database::{map_tr_err, Database};
use crate::queries::parse_enum;

const COLUMNS: &str = "id, title, description, content_id, due_date, status, priority, \
                       estimated_hours, created_at, updated_at";

pub(crate) fn task_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        content_id: row.get(3)?,
        due_date: row.get(4)?,
        status: parse_enum(5, row.get(5)?)?,
        priority: parse_enum(6, row.get(6)?)?,
        estimated_hours: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

/// List all tasks in id order.
pub async fn list(db: &Database) -> Result<Vec<Task>, StrategistError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM tasks ORDER BY id"))?;
            let rows = stmt.query_map([], task_from_row)?;
            let mut tasks = Vec::new();
            for row in rows {
                tasks.push(row?);
            }
            Ok(tasks)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a task by id.
pub async fn get(db: &Database, id: i64) -> Result<Option<Task>, StrategistError> {
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                task_from_row,
            );
            match result {
                Ok(task) => Ok(Some(task)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Create a task. Status defaults to pending and priority to medium.
pub async fn create(db: &Database, draft: TaskDraft) -> Result<Task, StrategistError> {
    draft.validate()?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO tasks
                 (title, description, content_id, due_date, status, priority, estimated_hours)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    draft.title,
                    draft.description,
                    draft.content_id,
                    draft.due_date,
                    draft.status.unwrap_or_default().to_string(),
                    draft.priority.unwrap_or_default().to_string(),
                    draft.estimated_hours,
                ],
            )?;
            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                task_from_row,
            )
        })
        .await
        .map_err(map_tr_err)
}

/// Apply a partial update and refresh `updated_at`.
pub async fn update(db: &Database, id: i64, patch: TaskPatch) -> Result<Task, StrategistError> {
    let mut task = get(db, id)
        .await?
        .ok_or_else(|| StrategistError::not_found("task", id))?;
    patch.apply(&mut task)?;

    let updated = db
        .connection()
        .call(move |conn| {
            let n = conn.execute(
                "UPDATE tasks SET title = ?1, description = ?2, content_id = ?3, due_date = ?4,
                 status = ?5, priority = ?6, estimated_hours = ?7,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?8",
                params![
                    task.title,
                    task.description,
                    task.content_id,
                    task.due_date,
                    task.status.to_string(),
                    task.priority.to_string(),
                    task.estimated_hours,
                    id,
                ],
            )?;
            if n == 0 {
                return Ok(None);
            }
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                task_from_row,
            )
            .map(Some)
        })
        .await
        .map_err(map_tr_err)?;

    updated.ok_or_else(|| StrategistError::not_found("task", id))
}

/// Delete a task.
pub async fn delete(db: &Database, id: i64) -> Result<(), StrategistError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            let n = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(StrategistError::not_found("task", id));
    }
    Ok(())
}
