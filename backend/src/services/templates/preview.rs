use actix_web::{web, HttpResponse};
use common::requests::{PreviewRequest, PreviewResponse};
use common::templates::{render, unknown_placeholders};

pub async fn process(payload: web::Json<PreviewRequest>) -> HttpResponse {
    let rendered = render(&payload.content, payload.language);
    let unknown = unknown_placeholders(&payload.content)
        .into_iter()
        .map(str::to_string)
        .collect();
    HttpResponse::Ok().json(PreviewResponse { rendered, unknown })
}
