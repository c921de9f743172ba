//! # Template Retrieval Service
//!
//! Backend logic for `GET /api/templates/{template_type}`.
//!
//! The stored record is answered as a `MessageTemplate`. A template type that
//! has a variable set but was never saved answers an empty template, so the
//! editor can start from scratch; any other unknown type is `404`.

use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::template::MessageTemplate;
use common::templates::dictionary::TemplateVariableSets;
use rusqlite::{params, Connection, OptionalExtension};

/// Actix web handler for the `GET /api/templates/{template_type}` endpoint.
///
/// # Returns
/// - `200 OK` with the `MessageTemplate` as JSON.
/// - `404 Not Found` for an unknown template type.
/// - `503 Service Unavailable` if the database cannot be read.
pub async fn process(
    template_type: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let template_type = template_type.into_inner();
    let template = db.run(move |conn| get_template(conn, &template_type)).await?;
    Ok(HttpResponse::Ok().json(template))
}

pub fn get_template(conn: &Connection, template_type: &str) -> Result<MessageTemplate, ApiError> {
    let stored = conn
        .query_row(
            "SELECT template_type, content_ar, content_en FROM message_templates
             WHERE template_type = ?1",
            params![template_type],
            |row| {
                Ok(MessageTemplate {
                    template_type: row.get(0)?,
                    content_ar: row.get(1)?,
                    content_en: row.get(2)?,
                })
            },
        )
        .optional()?;

    match stored {
        Some(template) => Ok(template),
        None if TemplateVariableSets::builtin().contains(template_type) => {
            Ok(MessageTemplate::empty(template_type))
        }
        None => Err(ApiError::NotFound(format!(
            "Template type '{}' not found",
            template_type
        ))),
    }
}
