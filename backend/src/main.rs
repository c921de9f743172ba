mod config;
mod db;
mod error;
mod gateway;
mod services;

use crate::config::Config;
use crate::db::Database;
use crate::error::ApiError;
use crate::gateway::OutboxGateway;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let db = Database::new(&config.database_path);
    db.init_schema()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    info!("Using database {}", db.path().display());

    let gateway = OutboxGateway::new(db.clone()).into_app_data();
    let json_limit = config.json_limit;
    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(|err, _req| ApiError::InvalidRequest(err.to_string()).into()),
            )
            .app_data(web::Data::new(db.clone()))
            .app_data(gateway.clone())
            .configure(services::configure)
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
