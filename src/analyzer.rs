// src/analyzer.rs
use std::time::Instant;

use crate::errors::{AssistantError, Result};
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::prompt::build_prompt;
use crate::providers::ModelClient;

/// Run one analysis against `model` and return the raw report.
///
/// Every client failure is wrapped into `AssistantError::Service` so the
/// message always tells the user to check the service and the model.
pub async fn analyze<C: ModelClient>(
    client: &C,
    model: &str,
    request: &AnalysisRequest,
) -> Result<String> {
    let prompt = build_prompt(request);
    let start = Instant::now();

    log::info!(
        "🎯 Analyzing {} bytes of code and {} bytes of traceback with {}",
        request.code().len(),
        request.traceback().len(),
        model
    );

    let report = client
        .generate(model, prompt.system, &prompt.user)
        .await
        .map_err(|e| {
            log::error!("❌ Model '{}' failed: {}", model, e);
            AssistantError::Service {
                model: model.to_string(),
                source: Box::new(e),
            }
        })?;

    log::info!("✅ Report received in {}ms", start.elapsed().as_millis());
    Ok(report)
}

/// Same as [`analyze`] but folded into the result shown by the shells.
pub async fn run_analysis<C: ModelClient>(
    client: &C,
    model: &str,
    request: &AnalysisRequest,
) -> AnalysisResult {
    analyze(client, model, request).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::SYSTEM_INSTRUCTION;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, String, String)>>,
        fail: bool,
    }

    impl ModelClient for Recorder {
        async fn generate(&self, model: &str, system: &str, prompt: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), system.to_string(), prompt.to_string()));
            if self.fail {
                Err(AssistantError::ApiError {
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok("Root Cause: X\nLine of Fix: Y\nSuggested Code Fix: Z".to_string())
            }
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest::new("result = calculate(10, '5')", "TypeError: can't multiply").unwrap()
    }

    #[actix_rt::test]
    async fn test_analyze_passes_both_instructions() {
        let client = Recorder::default();
        let report = analyze(&client, "llama3:8b", &request()).await.unwrap();

        assert_eq!(report, "Root Cause: X\nLine of Fix: Y\nSuggested Code Fix: Z");
        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "llama3:8b");
        assert_eq!(calls[0].1, SYSTEM_INSTRUCTION);
        assert!(calls[0].2.contains("result = calculate(10, '5')"));
    }

    #[actix_rt::test]
    async fn test_failures_become_service_errors() {
        let client = Recorder {
            fail: true,
            ..Default::default()
        };

        let err = analyze(&client, "mistral:7b", &request()).await.unwrap_err();
        assert!(matches!(err, AssistantError::Service { ref model, .. } if model == "mistral:7b"));

        let result = run_analysis(&client, "mistral:7b", &request()).await;
        assert!(!result.is_success());
        assert!(result.text().contains("Error"));
        assert!(result.text().contains("mistral:7b"));
    }
}
