pub mod groups;
pub mod templates;

use actix_web::web;

/// Registers every API scope. Shared by `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(templates::configure_routes())
        .service(groups::configure_routes());
}
