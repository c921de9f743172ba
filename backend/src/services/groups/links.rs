//! # Link Pool Snapshot
//!
//! `GET /api/groups/{group_id}/links` answers the group's sessions in schedule
//! order together with every meeting link, split into available and reserved.
//! The frontend runs the distribution on this snapshot; `activate` runs it
//! again on a fresh one inside its transaction.

use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::link_pool::{GroupStatus, LinkPool};
use common::model::meeting_link::{LinkPlatform, LinkStatus, MeetingLink};
use common::model::session::Session;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

pub async fn process(
    group_id: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let group_id = group_id.into_inner();
    let pool = db.run(move |conn| load_link_pool(conn, &group_id)).await?;
    Ok(HttpResponse::Ok().json(pool))
}

/// Returns the group's status, or `NotFound` for an unknown group.
pub(super) fn group_status(conn: &Connection, group_id: &str) -> Result<GroupStatus, ApiError> {
    let status: Option<String> = conn
        .query_row(
            "SELECT status FROM groups WHERE id = ?1",
            params![group_id],
            |row| row.get(0),
        )
        .optional()?;
    status
        .map(|status| GroupStatus::parse(&status))
        .ok_or_else(|| ApiError::NotFound(format!("Group '{}' not found", group_id)))
}

pub(super) fn load_link_pool(conn: &Connection, group_id: &str) -> Result<LinkPool, ApiError> {
    let status = group_status(conn, group_id)?;

    let sessions = conn
        .prepare(
            "SELECT id, title, scheduled_date, start_time, end_time FROM sessions
             WHERE group_id = ?1
             ORDER BY scheduled_date, start_time, id",
        )?
        .query_map(params![group_id], |row| {
            Ok(Session {
                id: row.get(0)?,
                title: row.get(1)?,
                scheduled_date: row.get(2)?,
                start_time: row.get(3)?,
                end_time: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let links = conn
        .prepare("SELECT id, platform, name, url, status FROM meeting_links ORDER BY name, id")?
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut available = Vec::new();
    let mut reserved = Vec::new();
    for (id, platform, name, url, status) in links {
        let Some(status) = LinkStatus::parse(&status) else {
            warn!("Skipping meeting link '{}' with unknown status '{}'", id, status);
            continue;
        };
        let link = MeetingLink {
            id,
            platform: LinkPlatform::parse(&platform),
            name,
            url,
            status,
        };
        match status {
            LinkStatus::Available => available.push(link),
            LinkStatus::Reserved => reserved.push(link),
        }
    }

    Ok(LinkPool::new(group_id, status, sessions, available, reserved))
}
