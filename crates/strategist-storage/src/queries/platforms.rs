// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform store CRUD operations.

use rusqlite::params;
use strategist_core::inputs::{PlatformDraft, PlatformPatch};
use strategist_core::{Platform, StrategistError};

use crate::database::{map_tr_err, Database};

fn platform_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Platform> {
    Ok(Platform {
        id: row.get(0)?,
        platform_name: row.get(1)?,
        current_followers: row.get(2)?,
        goal_followers: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

const COLUMNS: &str = "id, platform_name, current_followers, goal_followers, created_at, updated_at";

/// List all platforms in id order.
pub async fn list(db: &Database) -> Result<Vec<Platform>, StrategistError> {
    db.connection()
        .call(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {COLUMNS} FROM platforms ORDER BY id"))?;
            let rows = stmt.query_map([], platform_from_row)?;
            let mut platforms = Vec::new();
            for row in rows {
                platforms.push(row?);
            }
            Ok(platforms)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a platform by id.
pub async fn get(db: &Database, id: i64) -> Result<Option<Platform>, StrategistError> {
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {COLUMNS} FROM platforms WHERE id = ?1"),
                params![id],
                platform_from_row,
            );
            match result {
                Ok(platform) => Ok(Some(platform)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Get a platform by its unique name.
pub async fn get_by_name(
    db: &Database,
    name: &str,
) -> Result<Option<Platform>, StrategistError> {
    let name = name.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {COLUMNS} FROM platforms WHERE platform_name = ?1"),
                params![name],
                platform_from_row,
            );
            match result {
                Ok(platform) => Ok(Some(platform)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Create a platform. Fails with a validation error when the name is
/// blank, a counter is negative, or the name is already taken.
pub async fn create(db: &Database, draft: PlatformDraft) -> Result<Platform, StrategistError> {
    draft.validate()?;
    let name = draft.platform_name.trim().to_string();
    let created = db
        .connection()
        .call(move |conn| {
            let taken: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM platforms WHERE platform_name = ?1)",
                params![name],
                |row| row.get(0),
            )?;
            if taken {
                return Ok(None);
            }
            conn.execute(
                "INSERT INTO platforms (platform_name, current_followers, goal_followers)
                 VALUES (?1, ?2, ?3)",
                params![name, draft.current_followers, draft.goal_followers],
            )?;
            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM platforms WHERE id = ?1"),
                params![id],
                platform_from_row,
            )
            .map(Some)
        })
        .await
        .map_err(map_tr_err)?;

    created.ok_or_else(|| {
        StrategistError::validation("platform_name", "a platform with this name already exists")
    })
}

enum UpdateOutcome {
    Updated(Platform),
    DuplicateName,
    Missing,
}

/// Apply a partial update and refresh `updated_at`.
pub async fn update(
    db: &Database,
    id: i64,
    patch: PlatformPatch,
) -> Result<Platform, StrategistError> {
    let mut platform = get(db, id)
        .await?
        .ok_or_else(|| StrategistError::not_found("platform", id))?;
    patch.apply(&mut platform)?;

    let outcome = db
        .connection()
        .call(move |conn| {
            let taken: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM platforms WHERE platform_name = ?1 AND id != ?2)",
                params![platform.platform_name, id],
                |row| row.get(0),
            )?;
            if taken {
                return Ok(UpdateOutcome::DuplicateName);
            }
            let n = conn.execute(
                "UPDATE platforms SET platform_name = ?1, current_followers = ?2,
                 goal_followers = ?3, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?4",
                params![
                    platform.platform_name,
                    platform.current_followers,
                    platform.goal_followers,
                    id
                ],
            )?;
            if n == 0 {
                return Ok(UpdateOutcome::Missing);
            }
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM platforms WHERE id = ?1"),
                params![id],
                platform_from_row,
            )
            .map(UpdateOutcome::Updated)
        })
        .await
        .map_err(map_tr_err)?;

    match outcome {
        UpdateOutcome::Updated(platform) => Ok(platform),
        UpdateOutcome::DuplicateName => Err(StrategistError::validation(
            "platform_name",
            "a platform with this name already exists",
        )),
        UpdateOutcome::Missing => Err(StrategistError::not_found("platform", id)),
    }
}

/// Delete a platform and its junction rows. Content items keep their
/// dangling references; readers resolve them lazily.
pub async fn delete(db: &Database, id: i64) -> Result<(), StrategistError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM content_platforms WHERE platform_id = ?1",
                params![id],
            )?;
            let n = tx.execute("DELETE FROM platforms WHERE id = ?1", params![id])?;
            tx.commit()?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(StrategistError::not_found("platform", id));
    }
    Ok(())
}
