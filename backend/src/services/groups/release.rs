//! # Reserved Link Release
//!
//! `POST /api/groups/{group_id}/links/release` puts every link reserved for the
//! group back into the available pool and clears the session bindings that
//! pointed at them. An active group goes back to `pending`, since its sessions
//! lost their links. Callers fetch a new snapshot afterwards and distribute
//! again.

use super::links::group_status;
use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::link_pool::GroupStatus;
use common::requests::ReleaseLinksResponse;
use log::info;
use rusqlite::{params, Connection, TransactionBehavior};

pub async fn process(
    group_id: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let group_id = group_id.into_inner();
    let released = db
        .run(move |conn| release_reserved(conn, &group_id))
        .await?;
    Ok(HttpResponse::Ok().json(ReleaseLinksResponse { released }))
}

/// Returns the number of links released; zero means there was nothing to do.
pub fn release_reserved(conn: &mut Connection, group_id: &str) -> Result<usize, ApiError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let status = group_status(&tx, group_id)?;

    tx.execute(
        "UPDATE sessions SET link_id = NULL
         WHERE group_id = ?1
           AND link_id IN (SELECT id FROM meeting_links WHERE reserved_for_group = ?1)",
        params![group_id],
    )?;
    let released = tx.execute(
        "UPDATE meeting_links SET status = 'available', reserved_for_group = NULL
         WHERE status = 'reserved' AND reserved_for_group = ?1",
        params![group_id],
    )?;
    if status == GroupStatus::Active {
        tx.execute(
            "UPDATE groups SET status = ?1 WHERE id = ?2",
            params![GroupStatus::Pending.as_str(), group_id],
        )?;
    }
    tx.commit()?;

    info!("Released {} meeting link(s) of group '{}'", released, group_id);
    if status == GroupStatus::Active {
        info!("Group '{}' is pending again", group_id);
    }
    Ok(released)
}
