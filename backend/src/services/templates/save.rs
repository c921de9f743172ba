use crate::db::Database;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::template::MessageTemplate;
use common::requests::SaveTemplateRequest;
use common::templates::unknown_placeholders;
use log::{info, warn};
use rusqlite::{params, Connection};

pub async fn process(
    payload: web::Json<SaveTemplateRequest>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let saved = db.run(move |conn| save_template(conn, payload)).await?;
    Ok(HttpResponse::Ok().json(saved))
}

pub fn save_template(
    conn: &Connection,
    payload: SaveTemplateRequest,
) -> Result<MessageTemplate, ApiError> {
    let template_type = payload.template_type.trim();
    if template_type.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Template type must not be empty".to_string(),
        ));
    }

    for content in [&payload.content_ar, &payload.content_en] {
        let unknown = unknown_placeholders(content);
        if !unknown.is_empty() {
            warn!(
                "Template '{}' saved with unknown placeholders: {}",
                template_type,
                unknown.join(", ")
            );
        }
    }

    conn.execute(
        "INSERT INTO message_templates (template_type, content_ar, content_en)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(template_type) DO UPDATE SET
             content_ar = excluded.content_ar,
             content_en = excluded.content_en,
             updated_at = CURRENT_TIMESTAMP",
        params![template_type, &payload.content_ar, &payload.content_en],
    )?;
    info!("Saved template '{}'", template_type);

    Ok(MessageTemplate {
        template_type: template_type.to_string(),
        content_ar: payload.content_ar,
        content_en: payload.content_en,
    })
}
