//! # Group Link Service Module
//!
//! Endpoints behind the group-activation modal, under `/api/groups`.
//!
//! ## Sub-modules:
//! - `links`: Snapshot of a group's sessions and the meeting-link pool.
//! - `release`: Frees the links reserved for a group so distribution can be rerun.
//! - `activate`: Distributes links over the sessions and activates the group.

mod activate;
mod links;
mod release;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/groups";

/// Configures and returns the Actix `Scope` for group routes.
///
/// # Registered Routes:
///
/// *   **`GET /{group_id}/links`**: the `LinkPool` snapshot of the group.
/// *   **`POST /{group_id}/links/release`**: releases the links reserved for the
///     group and answers the released count. Zero is a normal answer.
/// *   **`POST /{group_id}/activate`**: activates the group. Answers
///     `409 consent_required` when the coverage needs an acknowledgement the
///     request does not carry.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{group_id}/links", get().to(links::process))
        .route("/{group_id}/links/release", post().to(release::process))
        .route("/{group_id}/activate", post().to(activate::process))
}
