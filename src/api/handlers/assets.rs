// src/api/handlers/assets.rs
use actix_web::{HttpResponse, Responder, web};
use std::borrow::Cow;

use crate::api::page::StaticAssets;

pub async fn static_asset(path: web::Path<String>) -> impl Responder {
    let path = path.into_inner();

    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}
