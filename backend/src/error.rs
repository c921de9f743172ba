//! Error type shared by all HTTP handlers.
//!
//! Handlers return `Result<HttpResponse, ApiError>`; actix turns the error into
//! a JSON `ApiErrorBody` with the matching status code. Storage failures answer
//! `503 Service Unavailable` so the frontend can offer a retry.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ApiErrorBody;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{message}")]
    Conflict { code: &'static str, message: String },
    #[error("background task failed: {0}")]
    Task(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Database(_) => "database_unavailable",
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Conflict { code, .. } => *code,
            ApiError::Task(_) => "internal",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ApiErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        })
    }
}
