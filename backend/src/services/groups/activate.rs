//! # Group Activation
//!
//! `POST /api/groups/{group_id}/activate` is the confirmation step of the
//! activation modal. Within one transaction it:
//!
//! 1. Rejects unknown (`404`) and already active (`409 already_active`) groups.
//!    An active group must release its links first, which makes it pending.
//! 2. Loads a fresh link pool snapshot and distributes the available links over
//!    the sessions.
//! 3. Checks the resulting coverage against the consent carried by the request
//!    and answers `409 consent_required` when it is not enough.
//! 4. Binds every linked session to its link, reserves those links for the
//!    group and marks the group active.

use super::links::{group_status, load_link_pool};
use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::links::{distribute, ActivationConsent, Coverage};
use common::model::link_pool::GroupStatus;
use common::requests::{ActivateGroupRequest, ActivateGroupResponse};
use log::info;
use rusqlite::{params, Connection, TransactionBehavior};

pub async fn process(
    group_id: web::Path<String>,
    payload: web::Json<ActivateGroupRequest>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let group_id = group_id.into_inner();
    let consent = payload.into_inner().consent;
    let response = db
        .run(move |conn| activate_group(conn, &group_id, &consent))
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn activate_group(
    conn: &mut Connection,
    group_id: &str,
    consent: &ActivationConsent,
) -> Result<ActivateGroupResponse, ApiError> {
    // Takes the write lock up front so two activations cannot both read the
    // same available links.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if group_status(&tx, group_id)? == GroupStatus::Active {
        return Err(ApiError::Conflict {
            code: "already_active",
            message: format!("Group '{}' is already active", group_id),
        });
    }

    let pool = load_link_pool(&tx, group_id)?;
    let assignment = distribute(&pool.sessions, &pool.available);
    let coverage = Coverage::classify(&pool, &assignment);

    if coverage == Coverage::NoSessions {
        return Err(ApiError::InvalidRequest(format!(
            "Group '{}' has no sessions to activate",
            group_id
        )));
    }
    if !coverage.permits(consent) {
        return Err(ApiError::Conflict {
            code: "consent_required",
            message: format!(
                "{} of {} session(s) would have no meeting link; confirm to proceed",
                coverage.unlinked_sessions(pool.sessions.len()),
                pool.sessions.len()
            ),
        });
    }

    let mut linked_sessions = 0;
    for a in &assignment {
        let Some(link) = a.link else { continue };
        tx.execute(
            "UPDATE sessions SET link_id = ?1 WHERE id = ?2",
            params![link.id, a.session.id],
        )?;
        tx.execute(
            "UPDATE meeting_links SET status = 'reserved', reserved_for_group = ?1 WHERE id = ?2",
            params![group_id, link.id],
        )?;
        linked_sessions += 1;
    }
    tx.execute(
        "UPDATE groups SET status = ?1 WHERE id = ?2",
        params![GroupStatus::Active.as_str(), group_id],
    )?;
    tx.commit()?;

    info!(
        "Activated group '{}': {} of {} session(s) linked",
        group_id,
        linked_sessions,
        pool.sessions.len()
    );
    Ok(ActivateGroupResponse {
        coverage,
        linked_sessions,
    })
}
