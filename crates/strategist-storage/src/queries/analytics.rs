// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only analytics ledger.
//!
//! Records are timestamped snapshots; the list path filters by a
//! trailing day window on `date_recorded` (7 days by default).

use rusqlite::params;
use strategist_core::inputs::AnalyticsDraft;
use strategist_core::{AnalyticsRecord, StrategistError};

use crate::database::{map_tr_err, Database};

const COLUMNS: &str = "id, content_id, platform_id, date_recorded, views, likes, shares, \
                       comments, saves, retention_rate, engagement_rate, created_at";

pub(crate) fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AnalyticsRecord> {
    Ok(AnalyticsRecord {
        id: row.get(0)?,
        content_id: row.get(1)?,
        platform_id: row.get(2)?,
        date_recorded: row.get(3)?,
        views: row.get(4)?,
        likes: row.get(5)?,
        shares: row.get(6)?,
        comments: row.get(7)?,
        saves: row.get(8)?,
        retention_rate: row.get(9)?,
        engagement_rate: row.get(10)?,
        created_at: row.get(11)?,
    })
}

/// List records whose `date_recorded` falls within the last `days` days.
pub async fn list(db: &Database, days: u32) -> Result<Vec<AnalyticsRecord>, StrategistError> {
    let window = format!("-{days} days");
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM analytics
                 WHERE date_recorded >= date('now', ?1) ORDER BY date_recorded DESC, id DESC"
            ))?;
            let rows = stmt.query_map(params![window], record_from_row)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(map_tr_err)
}

/// List records filtered by platform id, unbounded by date.
pub async fn list_for_platform(
    db: &Database,
    platform_id: i64,
) -> Result<Vec<AnalyticsRecord>, StrategistError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM analytics WHERE platform_id = ?1
                 ORDER BY date_recorded DESC, id DESC"
            ))?;
            let rows = stmt.query_map(params![platform_id], record_from_row)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(map_tr_err)
}

/// Append a snapshot. The content/platform references are weak like
/// every other cross-store reference, but both ids are required fields.
pub async fn create(
    db: &Database,
    draft: AnalyticsDraft,
) -> Result<AnalyticsRecord, StrategistError> {
    draft.validate()?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO analytics
                 (content_id, platform_id, date_recorded, views, likes, shares, comments,
                  saves, retention_rate, engagement_rate)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    draft.content_id,
                    draft.platform_id,
                    draft.date_recorded,
                    draft.views,
                    draft.likes,
                    draft.shares,
                    draft.comments,
                    draft.saves,
                    draft.retention_rate,
                    draft.engagement_rate,
                ],
            )?;
            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {COLUMNS} FROM analytics WHERE id = ?1"),
                params![id],
                record_from_row,
            )
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a snapshot.
pub async fn delete(db: &Database, id: i64) -> Result<(), StrategistError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            let n = conn.execute("DELETE FROM analytics WHERE id = ?1", params![id])?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(StrategistError::not_found("analytics record", id));
    }
    Ok(())
}
