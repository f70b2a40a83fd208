// src/api/handlers/page.rs
use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{Error, HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::analyzer;
use crate::api::AppState;
use crate::api::page::{INPUT_ERROR, Outcome, PageView, render_page};
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::providers::ModelClient;

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub traceback: String,
}

pub async fn index<C: ModelClient + 'static>(state: web::Data<AppState<C>>) -> HttpResponse {
    html(&PageView::empty(state.model()))
}

/// Validates the form, runs the analysis inside this request and draws the
/// page once with its outcome.
pub async fn submit<C: ModelClient + 'static>(
    state: web::Data<AppState<C>>,
    form: web::Form<AnalyzeForm>,
) -> HttpResponse {
    let form = form.into_inner();

    let outcome = match AnalysisRequest::new(&form.code, &form.traceback) {
        Ok(request) => match analyzer::run_analysis(&*state.client, state.model(), &request).await {
            AnalysisResult::Success(report) => Outcome::Report(report),
            AnalysisResult::Failure(message) => Outcome::Failed(message),
        },
        Err(e) => {
            log::warn!("⚠️  Rejected page submit: {}", e);
            Outcome::Invalid(INPUT_ERROR.to_string())
        }
    };

    html(&PageView {
        model: state.model(),
        code: &form.code,
        traceback: &form.traceback,
        outcome,
    })
}

/// Draws the page with an error notice when the form body cannot be read.
pub fn form_error<C: ModelClient + 'static>(err: UrlencodedError, req: &HttpRequest) -> Error {
    log::warn!("⚠️  Could not read submitted form: {}", err);

    let model = req
        .app_data::<web::Data<AppState<C>>>()
        .map(|state| state.model().to_string())
        .unwrap_or_default();
    let view = PageView {
        outcome: Outcome::Failed(format!("Error: the submitted form could not be read ({}).", err)),
        ..PageView::empty(&model)
    };
    let mut response = html(&view);
    *response.status_mut() = actix_web::http::StatusCode::BAD_REQUEST;

    InternalError::from_response(err, response).into()
}

fn html(view: &PageView<'_>) -> HttpResponse {
    match render_page(view) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render page: {}", e);
            HttpResponse::InternalServerError().body("Failed to render page")
        }
    }
}
