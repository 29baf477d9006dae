// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content pillar store CRUD operations.

use rusqlite::params;
use strategist_core::inputs::{PillarDraft, PillarPatch};
use strategist_core::{ContentPillar, StrategistError};

use crate::database::{map_tr_err, Database};

const COLUMNS: &str = "id, pillar_name, description, keywords, target_audience, \
                       content_frequency, goals, color, created_at, updated_at";

fn pillar_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContentPillar> {
    Ok(ContentPillar {
        id: row.get(0)?,
        pillar_name: row.get(1)?,
        description: row.get(2)?,
        keywords: row.get(3)?,
        target_audience: row.get(4)?,
        content_frequency: row.get(5)?,
        goals: row.get(6)?,
        color: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

/// List all pillars in id order.
pub async fn list(db: &Database) -> Result<Vec<ContentPillar>, StrategistError> {
    db.connection()
        .call(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {COLUMNS} FROM content_pillars ORDER BY id"))?;
            let rows = stmt.query_map([], pillar_from_row)?;
            let mut pillars = Vec::new();
            for row in rows {
                pillars.push(row?);
            }
            Ok(pillars)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a pillar by id.
pub async fn get(db: &Database, id: i64) -> Result<Option<ContentPillar>, StrategistError> {
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_pillars WHERE id = ?1"),
                params![id],
                pillar_from_row,
            );
            match result {
                Ok(pillar) => Ok(Some(pillar)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Create a pillar.
pub async fn create(db: &Database, draft: PillarDraft) -> Result<ContentPillar, StrategistError> {
    draft.validate()?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO content_pillars
                 (pillar_name, description, keywords, target_audience, content_frequency, goals, color)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    draft.pillar_name,
                    draft.description,
                    draft.keywords,
                    draft.target_audience,
                    draft.content_frequency,
                    draft.goals,
                    draft.color,
                ],
            )?;
            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_pillars WHERE id = ?1"),
                params![id],
                pillar_from_row,
            )
        })
        .await
        .map_err(map_tr_err)
}

/// Apply a partial update and refresh `updated_at`.
pub async fn update(
    db: &Database,
    id: i64,
    patch: PillarPatch,
) -> Result<ContentPillar, StrategistError> {
    let mut pillar = get(db, id)
        .await?
        .ok_or_else(|| StrategistError::not_found("content pillar", id))?;
    patch.apply(&mut pillar)?;

    let updated = db
        .connection()
        .call(move |conn| {
            let n = conn.execute(
                "UPDATE content_pillars SET pillar_name = ?1, description = ?2, keywords = ?3,
                 target_audience = ?4, content_frequency = ?5, goals = ?6, color = ?7,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?8",
                params![
                    pillar.pillar_name,
                    pillar.description,
                    pillar.keywords,
                    pillar.target_audience,
                    pillar.content_frequency,
                    pillar.goals,
                    pillar.color,
                    id,
                ],
            )?;
            if n == 0 {
                return Ok(None);
            }
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM content_pillars WHERE id = ?1"),
                params![id],
                pillar_from_row,
            )
            .map(Some)
        })
        .await
        .map_err(map_tr_err)?;

    updated.ok_or_else(|| StrategistError::not_found("content pillar", id))
}

/// Delete a pillar. Ideas and content items keep their dangling
/// references; readers resolve them lazily.
pub async fn delete(db: &Database, id: i64) -> Result<(), StrategistError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            let n = conn.execute("DELETE FROM content_pillars WHERE id = ?1", params![id])?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(StrategistError::not_found("content pillar", id));
    }
    Ok(())
}
