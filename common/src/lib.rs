//! Shared core of the academy admin panel.
//!
//! Everything in this crate is pure: the backend and the frontend both call into
//! it with snapshots they own and get new values back.

pub mod links;
pub mod model;
pub mod requests;
pub mod templates;
