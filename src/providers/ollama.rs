// src/providers/ollama.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::OllamaConfig;
use crate::errors::{AssistantError, Result};
use crate::providers::ModelClient;

/// A provider for interacting with local Ollama models.
#[derive(Clone)]
pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

#[derive(Deserialize)]
struct OllamaErrorBody {
    error: String,
}

impl OllamaProvider {
    /// Creates a new `OllamaProvider`.
    pub fn new(client: Client, config: OllamaConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

impl ModelClient for OllamaProvider {
    /// Calls `/api/generate` without streaming and returns the generated text.
    async fn generate(&self, model: &str, system: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.api_base.trim_end_matches('/'));

        log::info!("📡 Calling Ollama: {} with model: {}", url, model);

        let body = OllamaRequest {
            model,
            prompt,
            system,
            stream: false,
        };

        let start = Instant::now();

        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Ollama response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            // Ollama reports failures as {"error": "..."}
            let body = serde_json::from_str::<OllamaErrorBody>(&error_body)
                .map(|e| e.error)
                .unwrap_or(error_body);
            return Err(AssistantError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp.text().await?;
        let ollama_resp: OllamaResponse = serde_json::from_str(&raw)
            .map_err(|e| AssistantError::UnexpectedResponse(format!("{}: {}", e, raw)))?;
        if ollama_resp.response.trim().is_empty() {
            return Err(AssistantError::EmptyResponse);
        }

        Ok(ollama_resp.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, HttpServer, web};
    use serde_json::{Value, json};
    use std::net::TcpListener;

    /// Serves `handler` at `/api/generate` on an ephemeral port and returns the base URL.
    fn stub_ollama<F, Fut>(handler: F) -> String
    where
        F: Fn(web::Json<Value>) -> Fut + Clone + Send + 'static,
        Fut: std::future::Future<Output = HttpResponse> + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = HttpServer::new(move || {
            App::new().route("/api/generate", web::post().to(handler.clone()))
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
        actix_rt::spawn(server);
        format!("http://{}", addr)
    }

    fn provider(api_base: String) -> OllamaProvider {
        OllamaProvider::new(
            Client::builder().no_proxy().build().unwrap(),
            OllamaConfig {
                api_base,
                model: "llama3:8b".to_string(),
            },
        )
    }

    #[actix_rt::test]
    async fn test_generate_sends_model_system_and_prompt() {
        let base = stub_ollama(|body: web::Json<Value>| async move {
            let body = body.into_inner();
            assert_eq!(body["model"], "llama3:8b");
            assert_eq!(body["system"], "be terse");
            assert_eq!(body["prompt"], "why?");
            assert_eq!(body["stream"], false);
            HttpResponse::Ok().json(json!({"model": "llama3:8b", "response": "Root Cause: X", "done": true}))
        });

        let output = provider(base)
            .generate("llama3:8b", "be terse", "why?")
            .await
            .unwrap();
        assert_eq!(output, "Root Cause: X");
    }

    #[actix_rt::test]
    async fn test_missing_model_surfaces_ollama_error_text() {
        let base = stub_ollama(|_body: web::Json<Value>| async move {
            HttpResponse::NotFound().json(json!({"error": "model 'llama3:8b' not found, try pulling it first"}))
        });

        let err = provider(base).generate("llama3:8b", "s", "p").await.unwrap_err();
        match err {
            AssistantError::ApiError { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "model 'llama3:8b' not found, try pulling it first");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[actix_rt::test]
    async fn test_malformed_and_empty_responses() {
        let base = stub_ollama(|_body: web::Json<Value>| async move {
            HttpResponse::Ok().body("<html>not json</html>")
        });
        let err = provider(base).generate("llama3:8b", "s", "p").await.unwrap_err();
        assert!(matches!(err, AssistantError::UnexpectedResponse(_)));

        let base = stub_ollama(|_body: web::Json<Value>| async move {
            HttpResponse::Ok().json(json!({"response": ""}))
        });
        let err = provider(base).generate("llama3:8b", "s", "p").await.unwrap_err();
        assert!(matches!(err, AssistantError::EmptyResponse));
    }

    #[actix_rt::test]
    async fn test_connection_refused_is_request_error() {
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();

        let err = provider(format!("http://127.0.0.1:{}", port))
            .generate("llama3:8b", "s", "p")
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Request(_)));
    }
}
