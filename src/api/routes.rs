// src/api/routes.rs
use actix_web::web;
use super::handlers;
use crate::providers::ModelClient;

/// Body ceiling for both submit routes. Pasted code and tracebacks are
/// forwarded to the model untruncated, so this only guards the server's memory.
pub const MAX_SUBMISSION_BYTES: usize = 256 * 1024 * 1024;

pub fn configure_routes<C: ModelClient + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .limit(MAX_SUBMISSION_BYTES)
            .error_handler(handlers::form_error::<C>),
    )
    .app_data(web::JsonConfig::default().limit(MAX_SUBMISSION_BYTES))
    .route("/", web::get().to(handlers::index::<C>))
    .route("/", web::post().to(handlers::submit::<C>))
    .route("/static/{path:.*}", web::get().to(handlers::static_asset))
    .service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check::<C>))
            .route("/analyze", web::post().to(handlers::analyze::<C>)),
    );
}
