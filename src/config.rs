// src/config.rs
use reqwest::Url;

use crate::errors::{AssistantError, Result};

pub const DEFAULT_OLLAMA_API_BASE: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3:8b";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the Ollama provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    pub api_base: String,
    pub model: String,
}

/// Address the web shell listens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub ollama: OllamaConfig,
    pub web: WebConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama: OllamaConfig {
                api_base: DEFAULT_OLLAMA_API_BASE.to_string(),
                model: DEFAULT_OLLAMA_MODEL.to_string(),
            },
            web: WebConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// `OLLAMA_API_BASE` wins over `OLLAMA_HOST`; the latter follows the
    /// Ollama CLI convention and may omit the scheme.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base = match (var("OLLAMA_API_BASE"), var("OLLAMA_HOST")) {
            (Some(base), _) => base,
            (None, Some(host)) if host.contains("://") => host,
            (None, Some(host)) => format!("http://{}", host),
            (None, None) => DEFAULT_OLLAMA_API_BASE.to_string(),
        };
        let url = Url::parse(&api_base).map_err(|e| {
            AssistantError::Config(format!("Invalid Ollama API base '{}': {}", api_base, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AssistantError::Config(format!(
                "Ollama API base '{}' must start with http:// or https://",
                api_base
            )));
        }

        let model = var("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string());

        let host = var("DEBUG_ASSISTANT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("DEBUG_ASSISTANT_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AssistantError::Config(format!("DEBUG_ASSISTANT_PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            ollama: OllamaConfig {
                api_base: api_base.trim_end_matches('/').to_string(),
                model,
            },
            web: WebConfig { host, port },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ollama.api_base, "http://localhost:11434");
        assert_eq!(config.ollama.model, "llama3:8b");
        assert_eq!(config.web.port, 8080);
    }

    #[test]
    fn test_api_base_takes_precedence_over_host() {
        let config = load(&[
            ("OLLAMA_API_BASE", "http://gpu-box:11434/"),
            ("OLLAMA_HOST", "0.0.0.0:9999"),
            ("OLLAMA_MODEL", "codellama:7b"),
        ])
        .unwrap();

        assert_eq!(config.ollama.api_base, "http://gpu-box:11434");
        assert_eq!(config.ollama.model, "codellama:7b");
    }

    #[test]
    fn test_ollama_host_without_scheme() {
        let config = load(&[("OLLAMA_HOST", "127.0.0.1:11500")]).unwrap();
        assert_eq!(config.ollama.api_base, "http://127.0.0.1:11500");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = load(&[("OLLAMA_MODEL", "  "), ("DEBUG_ASSISTANT_HOST", "")]).unwrap();
        assert_eq!(config.ollama.model, DEFAULT_OLLAMA_MODEL);
        assert_eq!(config.web.host, DEFAULT_HOST);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = load(&[("DEBUG_ASSISTANT_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, AssistantError::Config(_)));

        let err = load(&[("OLLAMA_API_BASE", "not a url")]).unwrap_err();
        assert!(matches!(err, AssistantError::Config(_)));

        let err = load(&[("OLLAMA_API_BASE", "localhost:11434")]).unwrap_err();
        assert!(matches!(err, AssistantError::Config(ref m) if m.contains("http://")));

        let err = load(&[("OLLAMA_HOST", "ftp://models.local")]).unwrap_err();
        assert!(matches!(err, AssistantError::Config(_)));
    }
}
