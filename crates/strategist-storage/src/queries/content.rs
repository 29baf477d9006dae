// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content item store: CRUD, platform associations, and the publish
//! transition.
//!
//! The publish transition and every platform-set replacement run inside
//! a single transaction so the row update and the junction table can
//! never be observed half-applied.

use std::collections::HashMap;

use rusqlite::params;
use strategist_core::inputs::{ContentItemDraft, ContentItemPatch, PublishRequest};
use strategist_core::{ContentItem, PlatformRef, StrategistError};

use crate::database::{map_tr_err, Database};
use crate::queries::parse_enum;

pub(crate) const COLUMNS: &str = "id, content_title, content_idea_id, content_pillar_id, status, \
                       content_type, content_format, publish_time, intention, hook, caption, \
                       script, music, duration, minutes_spent, content_link, hashtags_used, \
                       notes, views, likes, comments, shares, saves, retention_rate, \
                       created_at, updated_at";

pub(crate) fn item_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContentItem> {
    let content_type: Option<String> = row.get(5)?;
    let content_format: Option<String> = row.get(6)?;
    Ok(ContentItem {
        id: row.get(0)?,
        content_title: row.get(1)?,
        content_idea_id: row.get(2)?,
        content_pillar_id: row.get(3)?,
        status: parse_enum(4, row.get(4)?)?,
        content_type: content_type.map(|s| parse_enum(5, s)).transpose()?,
        content_format: content_format.map(|s| parse_enum(6, s)).transpose()?,
        publish_time: row.get(7)?,
        intention: row.get(8)?,
        hook: row.get(9)?,
        caption: row.get(10)?,
        script: row.get(11)?,
        music: row.get(12)?,
        duration: row.get(13)?,
        minutes_spent: row.get(14)?,
        content_link: row.get(15)?,
        hashtags_used: row.get(16)?,
        notes: row.get(17)?,
        views: row.get(18)?,
        likes: row.get(19)?,
        comments: row.get(20)?,
        shares: row.get(21)?,
        saves: row.get(22)?,
        retention_rate: row.get(23)?,
        platforms: Vec::new(),
        created_at: row.get(24)?,
        updated_at: row.get(25)?,
    })
}

/// Resolve the platform set for one content item. Dangling junction rows
/// (platform deleted) drop out of the join.
pub(crate) fn load_platforms(
    conn: &rusqlite::Connection,
    content_id: i64,
) -> rusqlite::Result<Vec<PlatformRef>> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.platform_name FROM content_platforms cp
         JOIN platforms p ON p.id = cp.platform_id
         WHERE cp.content_id = ?1 ORDER BY p.id",
    )?;
    let rows = stmt.query_map(params![content_id], |row| {
        Ok(PlatformRef {
            id: row.get(0)?,
            platform_name: row.get(1)?,
        })
    })?;
    let mut platforms = Vec::new();
    for row in rows {
        platforms.push(row?);
    }
    Ok(platforms)
}

/// One batched platform lookup for a whole listing, keyed by content id.
fn load_platform_map(
    conn: &rusqlite::Connection,
) -> rusqlite::Result<HashMap<i64, Vec<PlatformRef>>> {
    let mut stmt = conn.prepare(
        "SELECT cp.content_id, p.id, p.platform_name FROM content_platforms cp
         JOIN platforms p ON p.id = cp.platform_id
         ORDER BY cp.content_id, p.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            PlatformRef {
                id: row.get(1)?,
                platform_name: row.get(2)?,
            },
        ))
    })?;
    let mut map: HashMap<i64, Vec<PlatformRef>> = HashMap::new();
    for row in rows {
        let (content_id, platform) = row?;
        map.entry(content_id).or_default().push(platform);
    }
    Ok(map)
}

fn select_item(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<Option<ContentItem>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM content_manager WHERE id = ?1"),
        params![id],
        item_from_row,
    );
    match result {
        Ok(mut item) => {
            item.platforms = load_platforms(conn, id)?;
            Ok(Some(item))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Replace the association set. Ids without a matching platform row are
/// dropped, mirroring the resolve-against-platforms behavior of the
/// original association assignment.
fn replace_platforms(
    conn: &rusqlite::Connection,
    content_id: i64,
    platform_ids: &[i64],
) -> rusqlite::Result<()> {
    conn.execute(
        "DELETE FROM content_platforms WHERE content_id = ?1",
        params![content_id],
    )?;
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO content_platforms (content_id, platform_id)
         SELECT ?1, id FROM platforms WHERE id = ?2",
    )?;
    for platform_id in platform_ids {
        stmt.execute(params![content_id, platform_id])?;
    }
    Ok(())
}

/// List all content items in id order, with platform sets resolved in
/// one batched query.
pub async fn list(db: &Database) -> Result<Vec<ContentItem>, StrategistError> {
    db.connection()
        .call(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {COLUMNS} FROM content_manager ORDER BY id"))?;
            let rows = stmt.query_map([], item_from_row)?;
            let mut items = Vec::new();
            for row in rows {
                items.push(row?);
            }
            let mut platform_map = load_platform_map(conn)?;
            for item in &mut items {
                item.platforms = platform_map.remove(&item.id).unwrap_or_default();
            }
            Ok(items)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a content item by id.
pub async fn get(db: &Database, id: i64) -> Result<Option<ContentItem>, StrategistError> {
    db.connection()
        .call(move |conn| select_item(conn, id))
        .await
        .map_err(map_tr_err)
}

/// Create a content item, associating platforms when ids are provided.
pub async fn create(db: &Database, draft: ContentItemDraft) -> Result<ContentItem, StrategistError> {
    draft.validate()?;
    let created = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO content_manager
                 (content_title, content_idea_id, content_pillar_id, status, content_type,
                  content_format, publish_time, intention, hook, caption, script, music,
                  duration, minutes_spent, content_link, hashtags_used, notes,
                  views, likes, comments, shares, saves, retention_rate)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                         ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23)",
                params![
                    draft.content_title,
                    draft.content_idea_id,
                    draft.content_pillar_id,
                    draft.status.unwrap_or_default().to_string(),
                    draft.content_type.map(|t| t.to_string()),
                    draft.content_format.map(|f| f.to_string()),
                    draft.publish_time,
                    draft.intention,
                    draft.hook,
                    draft.caption,
                    draft.script,
                    draft.music,
                    draft.duration,
                    draft.minutes_spent,
                    draft.content_link,
                    draft.hashtags_used,
                    draft.notes,
                    draft.views,
                    draft.likes,
                    draft.comments,
                    draft.shares,
                    draft.saves,
                    draft.retention_rate,
                ],
            )?;
            let id = tx.last_insert_rowid();
            if let Some(ids) = &draft.platform_ids {
                replace_platforms(&tx, id, ids)?;
            }
            let item = select_item(&tx, id)?;
            tx.commit()?;
            Ok(item)
        })
        .await
        .map_err(map_tr_err)?;

    created.ok_or_else(|| StrategistError::Internal("created content item vanished".into()))
}

/// Apply a partial update. When `platform_ids` is present the full
/// association set is replaced in the same transaction.
pub async fn update(
    db: &Database,
    id: i64,
    mut patch: ContentItemPatch,
) -> Result<ContentItem, StrategistError> {
    let platform_ids = patch.platform_ids.take();
    let mut item = get(db, id)
        .await?
        .ok_or_else(|| StrategistError::not_found("content item", id))?;
    patch.apply(&mut item)?;

    let updated = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let n = tx.execute(
                "UPDATE content_manager SET content_title = ?1, content_idea_id = ?2,
                 content_pillar_id = ?3, status = ?4, content_type = ?5, content_format = ?6,
                 publish_time = ?7, intention = ?8, hook = ?9, caption = ?10, script = ?11,
                 music = ?12, duration = ?13, minutes_spent = ?14, content_link = ?15,
                 hashtags_used = ?16, notes = ?17, views = ?18, likes = ?19, comments = ?20,
                 shares = ?21, saves = ?22, retention_rate = ?23,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?24",
                params![
                    item.content_title,
                    item.content_idea_id,
                    item.content_pillar_id,
                    item.status.to_string(),
                    item.content_type.map(|t| t.to_string()),
                    item.content_format.map(|f| f.to_string()),
                    item.publish_time,
                    item.intention,
                    item.hook,
                    item.caption,
                    item.script,
                    item.music,
                    item.duration,
                    item.minutes_spent,
                    item.content_link,
                    item.hashtags_used,
                    item.notes,
                    item.views,
                    item.likes,
                    item.comments,
                    item.shares,
                    item.saves,
                    item.retention_rate,
                    id,
                ],
            )?;
            if n == 0 {
                return Ok(None);
            }
            if let Some(ids) = &platform_ids {
                replace_platforms(&tx, id, ids)?;
            }
            let item = select_item(&tx, id)?;
            tx.commit()?;
            Ok(item)
        })
        .await
        .map_err(map_tr_err)?;

    updated.ok_or_else(|| StrategistError::not_found("content item", id))
}

/// Atomically replace the full platform association set.
pub async fn set_platforms(
    db: &Database,
    id: i64,
    platform_ids: Vec<i64>,
) -> Result<ContentItem, StrategistError> {
    let updated = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let exists: bool = tx.query_row(
                "SELECT EXISTS(SELECT 1 FROM content_manager WHERE id = ?1)",
                params![id],
                |row| row.get(0),
            )?;
            if !exists {
                return Ok(None);
            }
            replace_platforms(&tx, id, &platform_ids)?;
            tx.execute(
                "UPDATE content_manager SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?1",
                params![id],
            )?;
            let item = select_item(&tx, id)?;
            tx.commit()?;
            Ok(item)
        })
        .await
        .map_err(map_tr_err)?;

    updated.ok_or_else(|| StrategistError::not_found("content item", id))
}

/// The publish transition: marks the item published, records its live
/// metadata, and replaces the platform distribution set. One transaction,
/// idempotent under replay.
pub async fn publish(
    db: &Database,
    id: i64,
    request: PublishRequest,
) -> Result<ContentItem, StrategistError> {
    let published = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let n = tx.execute(
                "UPDATE content_manager SET status = 'published',
                 publish_time = COALESCE(?1, publish_time),
                 content_link = COALESCE(?2, content_link),
                 minutes_spent = COALESCE(?3, minutes_spent),
                 notes = COALESCE(?4, notes),
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?5",
                params![
                    request.publish_time,
                    request.content_link,
                    request.minutes_spent,
                    request.notes,
                    id
                ],
            )?;
            if n == 0 {
                return Ok(None);
            }
            if let Some(ids) = &request.platform_ids {
                replace_platforms(&tx, id, ids)?;
            }
            let item = select_item(&tx, id)?;
            tx.commit()?;
            Ok(item)
        })
        .await
        .map_err(map_tr_err)?;

    published.ok_or_else(|| StrategistError::not_found("content item", id))
}

/// Delete a content item together with its junction rows and owned
/// subtasks. Tasks keep their dangling `content_id` references.
pub async fn delete(db: &Database, id: i64) -> Result<(), StrategistError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM content_platforms WHERE content_id = ?1",
                params![id],
            )?;
            tx.execute(
                "DELETE FROM content_subtasks WHERE content_id = ?1",
                params![id],
            )?;
            let n = tx.execute("DELETE FROM content_manager WHERE id = ?1", params![id])?;
            tx.commit()?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(StrategistError::not_found("content item", id));
    }
    Ok(())
}
