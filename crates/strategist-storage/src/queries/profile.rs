// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Singleton profile store.
//!
//! The profile row is created lazily on first read or write; updates
//! overwrite in place and no history is retained.

use rusqlite::params;
use strategist_core::inputs::ProfilePatch;
use strategist_core::{Profile, StrategistError};

use crate::database::{map_tr_err, Database};

const COLUMNS: &str =
    "id, mission, goals, vision, niche, target_audience, stories, motivation, created_at, updated_at";

fn profile_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        mission: row.get(1)?,
        goals: row.get(2)?,
        vision: row.get(3)?,
        niche: row.get(4)?,
        target_audience: row.get(5)?,
        stories: row.get(6)?,
        motivation: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn first_or_insert(conn: &rusqlite::Connection) -> rusqlite::Result<Profile> {
    let existing = conn.query_row(
        &format!("SELECT {COLUMNS} FROM profile ORDER BY id LIMIT 1"),
        [],
        profile_from_row,
    );
    match existing {
        Ok(profile) => Ok(profile),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            conn.execute("INSERT INTO profile DEFAULT VALUES", [])?;
            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM profile WHERE id = ?1"),
                params![id],
                profile_from_row,
            )
        }
        Err(e) => Err(e),
    }
}

/// Fetch the singleton profile, creating the row on first access.
pub async fn get(db: &Database) -> Result<Profile, StrategistError> {
    db.connection()
        .call(|conn| first_or_insert(conn))
        .await
        .map_err(map_tr_err)
}

/// Overwrite profile fields named by the patch; absent fields keep
/// their current values.
pub async fn update(db: &Database, patch: ProfilePatch) -> Result<Profile, StrategistError> {
    db.connection()
        .call(move |conn| {
            let mut profile = first_or_insert(conn)?;
            patch.apply(&mut profile);
            conn.execute(
                "UPDATE profile SET mission = ?1, goals = ?2, vision = ?3, niche = ?4,
                 target_audience = ?5, stories = ?6, motivation = ?7,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?8",
                params![
                    profile.mission,
                    profile.goals,
                    profile.vision,
                    profile.niche,
                    profile.target_audience,
                    profile.stories,
                    profile.motivation,
                    profile.id,
                ],
            )?;
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM profile WHERE id = ?1"),
                params![profile.id],
                profile_from_row,
            )
        })
        .await
        .map_err(map_tr_err)
}
