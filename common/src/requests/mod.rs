//! Request and response payloads exchanged between the frontend and the
//! backend REST API.

use crate::links::{ActivationConsent, Coverage};
use crate::model::language::Language;
use serde::{Deserialize, Serialize};

/// Payload of `POST /api/templates/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTemplateRequest {
    pub template_type: String,
    pub content_ar: String,
    pub content_en: String,
}

/// Payload of `POST /api/templates/preview`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub content: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub rendered: String,
    /// Placeholders that stayed untouched because no variable matches them.
    pub unknown: Vec<String>,
}

/// Payload of `POST /api/templates/test_send`.
///
/// `rendered` is the preview text exactly as the user saw it; the backend does
/// not render it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSendRequest {
    pub template_type: String,
    pub rendered: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSendResponse {
    pub message_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseLinksResponse {
    pub released: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivateGroupRequest {
    #[serde(default)]
    pub consent: ActivationConsent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateGroupResponse {
    pub coverage: Coverage,
    pub linked_sessions: usize,
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
