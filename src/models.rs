// src/models.rs
use crate::errors::{AssistantError, ValidationError};

/// The two text blocks collected by either shell for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    code: String,
    traceback: String,
}

impl AnalysisRequest {
    /// Trims both inputs and rejects the request if either one is empty.
    pub fn new(code: &str, traceback: &str) -> Result<Self, ValidationError> {
        let code = code.trim();
        let traceback = traceback.trim();

        if code.is_empty() {
            return Err(ValidationError::MissingCode);
        }
        if traceback.is_empty() {
            return Err(ValidationError::MissingTraceback);
        }

        Ok(Self {
            code: code.to_string(),
            traceback: traceback.to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn traceback(&self) -> &str {
        &self.traceback
    }
}

/// Outcome of one analysis as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    Success(String),
    Failure(String),
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            AnalysisResult::Success(text) | AnalysisResult::Failure(text) => text,
        }
    }
}

impl From<Result<String, AssistantError>> for AnalysisResult {
    fn from(result: Result<String, AssistantError>) -> Self {
        match result {
            Ok(report) => AnalysisResult::Success(report),
            Err(e) => AnalysisResult::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_inputs() {
        let request = AnalysisRequest::new("  x = 1 / 0\n", "\nZeroDivisionError  ").unwrap();
        assert_eq!(request.code(), "x = 1 / 0");
        assert_eq!(request.traceback(), "ZeroDivisionError");
    }

    #[test]
    fn test_request_rejects_missing_fields() {
        assert_eq!(
            AnalysisRequest::new("", "Traceback"),
            Err(ValidationError::MissingCode)
        );
        assert_eq!(
            AnalysisRequest::new("print(x)", "   \n\t"),
            Err(ValidationError::MissingTraceback)
        );
        assert_eq!(AnalysisRequest::new("", ""), Err(ValidationError::MissingCode));
    }

    #[test]
    fn test_result_from_error_keeps_message() {
        let result: AnalysisResult = Err::<String, _>(AssistantError::EmptyResponse).into();
        assert!(!result.is_success());
        assert_eq!(result.text(), "Received empty text response from model");

        let result: AnalysisResult = Ok::<_, AssistantError>("Root Cause: X".to_string()).into();
        assert_eq!(result, AnalysisResult::Success("Root Cause: X".to_string()));
    }
}
