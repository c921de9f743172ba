use crate::model::meeting_link::MeetingLink;
use crate::model::session::Session;
use serde::{Deserialize, Serialize};

/// Snapshot of everything the activation screen needs for one group: its
/// sessions in schedule order and the link pool split into available and
/// reserved links.
///
/// The aggregate counts are part of the wire format. Build the value through
/// [`LinkPool::new`] so that they always agree with the lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPool {
    pub group_id: String,
    pub group_status: GroupStatus,
    pub sessions: Vec<Session>,
    pub available: Vec<MeetingLink>,
    pub reserved: Vec<MeetingLink>,
    pub total_links: usize,
    pub reserved_links_count: usize,
    pub available_links_count: usize,
}

impl LinkPool {
    pub fn new(
        group_id: impl Into<String>,
        group_status: GroupStatus,
        sessions: Vec<Session>,
        available: Vec<MeetingLink>,
        reserved: Vec<MeetingLink>,
    ) -> Self {
        let available_links_count = available.len();
        let reserved_links_count = reserved.len();
        Self {
            group_id: group_id.into(),
            group_status,
            sessions,
            available,
            reserved,
            total_links: available_links_count + reserved_links_count,
            reserved_links_count,
            available_links_count,
        }
    }
}

/// Lifecycle of a group. Activation moves it to `Active`; releasing its links
/// puts it back to `Pending` so the links can be distributed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    Pending,
    Active,
}

impl GroupStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupStatus::Pending => "pending",
            GroupStatus::Active => "active",
        }
    }

    /// Anything but `active` counts as pending.
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => GroupStatus::Active,
            _ => GroupStatus::Pending,
        }
    }
}
