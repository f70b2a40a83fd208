// src/api/handlers/analyze.rs
use actix_web::{HttpResponse, Result, web};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use crate::analyzer;
use crate::api::AppState;
use crate::models::AnalysisRequest;
use crate::providers::ModelClient;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequestBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub traceback: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub id: String,
    pub status: String,
    pub model: String,
    pub report: Option<String>,
    pub error: Option<String>,
    pub timestamp: String,
    pub latency_ms: Option<u64>,
}

pub async fn analyze<C: ModelClient + 'static>(
    state: web::Data<AppState<C>>,
    req: web::Json<AnalyzeRequestBody>,
) -> Result<HttpResponse> {
    let analysis_id = Uuid::new_v4().to_string();
    let body = req.into_inner();
    let model = state.model().to_string();

    let mut response = AnalyzeResponse {
        id: analysis_id.clone(),
        status: String::new(),
        model: model.clone(),
        report: None,
        error: None,
        timestamp: chrono::Utc::now().to_rfc3339(),
        latency_ms: None,
    };

    let request = match AnalysisRequest::new(&body.code, &body.traceback) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("⚠️  Analysis {} rejected: {}", analysis_id, e);
            response.status = "invalid".to_string();
            response.error = Some(e.to_string());
            return Ok(HttpResponse::BadRequest().json(response));
        }
    };

    let start = Instant::now();
    match analyzer::analyze(&*state.client, &model, &request).await {
        Ok(report) => {
            response.status = "completed".to_string();
            response.report = Some(report);
            response.latency_ms = Some(start.elapsed().as_millis() as u64);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::error!("Analysis {} failed: {}", analysis_id, e);
            response.status = "error".to_string();
            response.error = Some(e.to_string());
            Ok(HttpResponse::BadGateway().json(response))
        }
    }
}
