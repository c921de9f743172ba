use serde::{Deserialize, Serialize};

/// A scheduled session of a group.
///
/// The scheduling fields are carried for display only; nothing in the core
/// parses them. Sessions are always consumed in the order the caller hands them
/// over, which the backend guarantees to be chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub scheduled_date: String,
    pub start_time: String,
    pub end_time: String,
}
