// src/providers/mod.rs

use crate::errors::Result;

pub mod ollama;

/// A text-completion backend that turns a system/user instruction pair into a report.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait ModelClient: Send + Sync {
    /// Generates a response for one analysis.
    ///
    /// # Arguments
    /// * `model` - The locally available model to use (e.g. "llama3:8b").
    /// * `system` - The fixed instruction describing the report format.
    /// * `prompt` - The per-request instruction carrying the code and traceback.
    ///
    /// # Returns
    /// The raw generated text. The caller decides what to do with failures.
    fn generate(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
