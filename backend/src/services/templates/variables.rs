use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::language::Language;
use common::templates::dictionary::TemplateVariableSets;
use common::templates::variables_for;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct VariablesQuery {
    /// `ar` when absent.
    pub lang: Option<String>,
}

pub async fn process(
    template_type: web::Path<String>,
    query: web::Query<VariablesQuery>,
) -> Result<HttpResponse, ApiError> {
    let template_type = template_type.into_inner();
    let language = match query.lang.as_deref() {
        None => Language::default(),
        Some(code) => Language::from_code(code)
            .ok_or_else(|| ApiError::InvalidRequest(format!("Unsupported language '{}'", code)))?,
    };
    if !TemplateVariableSets::builtin().contains(&template_type) {
        return Err(ApiError::NotFound(format!(
            "Template type '{}' not found",
            template_type
        )));
    }
    Ok(HttpResponse::Ok().json(variables_for(&template_type, language)))
}
