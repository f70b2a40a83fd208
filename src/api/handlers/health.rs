// src/api/handlers/health.rs
use actix_web::{HttpResponse, Result, web};
use serde_json::json;

use crate::api::AppState;

pub async fn health_check<C: 'static>(state: web::Data<AppState<C>>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "debug-assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.model(),
    })))
}
