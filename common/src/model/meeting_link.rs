use serde::{Deserialize, Serialize};

/// A reusable communication link (a Zoom room, a Meet URL, ...) that can be
/// bound to one session at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingLink {
    pub id: String,
    pub platform: LinkPlatform,
    pub name: String,
    pub url: String,
    pub status: LinkStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPlatform {
    Zoom,
    GoogleMeet,
    MicrosoftTeams,
    Other,
}

impl LinkPlatform {
    /// Wire name, also used as the stored value in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkPlatform::Zoom => "zoom",
            LinkPlatform::GoogleMeet => "google_meet",
            LinkPlatform::MicrosoftTeams => "microsoft_teams",
            LinkPlatform::Other => "other",
        }
    }

    /// Unknown stored values degrade to `Other` instead of failing a listing.
    pub fn parse(value: &str) -> Self {
        match value {
            "zoom" => LinkPlatform::Zoom,
            "google_meet" => LinkPlatform::GoogleMeet,
            "microsoft_teams" => LinkPlatform::MicrosoftTeams,
            _ => LinkPlatform::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkPlatform::Zoom => "Zoom",
            LinkPlatform::GoogleMeet => "Google Meet",
            LinkPlatform::MicrosoftTeams => "Microsoft Teams",
            LinkPlatform::Other => "Other",
        }
    }

    /// Material icon name.
    pub fn icon(self) -> &'static str {
        match self {
            LinkPlatform::Zoom => "videocam",
            LinkPlatform::GoogleMeet => "video_call",
            LinkPlatform::MicrosoftTeams => "groups",
            LinkPlatform::Other => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Available,
    Reserved,
}

impl LinkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkStatus::Available => "available",
            LinkStatus::Reserved => "reserved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(LinkStatus::Available),
            "reserved" => Some(LinkStatus::Reserved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_wire_names_match_serde() {
        for platform in [
            LinkPlatform::Zoom,
            LinkPlatform::GoogleMeet,
            LinkPlatform::MicrosoftTeams,
            LinkPlatform::Other,
        ] {
            assert_eq!(LinkPlatform::parse(platform.as_str()), platform);
        }
        assert_eq!(LinkPlatform::parse("webex"), LinkPlatform::Other);
    }

    #[test]
    fn status_parse_rejects_unknown_values() {
        assert_eq!(LinkStatus::parse("reserved"), Some(LinkStatus::Reserved));
        assert_eq!(LinkStatus::parse("busy"), None);
    }
}
