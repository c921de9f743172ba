//! # Test Message Service
//!
//! `POST /api/templates/test_send` validates an already rendered message and
//! hands it to the [`MessageGateway`]. Delivery is the gateway's business.

use crate::error::ApiError;
use crate::gateway::{MessageGateway, OutgoingMessage};
use actix_web::{web, HttpResponse};
use common::requests::{TestSendRequest, TestSendResponse};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("phone pattern is valid"));

pub async fn process(
    payload: web::Json<TestSendRequest>,
    gateway: web::Data<dyn MessageGateway>,
) -> Result<HttpResponse, ApiError> {
    let message = outgoing_message(payload.into_inner())?;
    let message_id = tokio::task::spawn_blocking(move || gateway.send(&message))
        .await
        .map_err(|e| ApiError::Task(e.to_string()))??;
    Ok(HttpResponse::Ok().json(TestSendResponse { message_id }))
}

/// Strips the separators people type into phone numbers and validates the rest.
pub fn normalize_destination(destination: &str) -> Result<String, ApiError> {
    let normalized: String = destination
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    if PHONE_RE.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(ApiError::InvalidRequest(format!(
            "'{}' is not a valid phone number",
            destination
        )))
    }
}

fn outgoing_message(payload: TestSendRequest) -> Result<OutgoingMessage, ApiError> {
    let destination = normalize_destination(&payload.destination)?;
    if payload.rendered.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Message must not be empty".to_string()));
    }
    Ok(OutgoingMessage {
        template_type: payload.template_type,
        destination,
        body: payload.rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destinations_are_normalized() {
        assert_eq!(
            normalize_destination("+966 (50) 000-0000").expect("valid"),
            "+966500000000"
        );
        assert!(normalize_destination("12345").is_err());
        assert!(normalize_destination("+9665000000001234").is_err());
        assert!(normalize_destination("call me").is_err());
    }

    #[test]
    fn blank_message_is_rejected() {
        let request = TestSendRequest {
            template_type: "student_welcome".to_string(),
            rendered: "  \n".to_string(),
            destination: "+966500000000".to_string(),
        };
        assert!(outgoing_message(request).is_err());
    }
}
