// src/api/state.rs
use crate::config::AppConfig;
use crate::providers::ollama::OllamaProvider;
use reqwest::Client;
use std::sync::Arc;

pub struct AppState<C = OllamaProvider> {
    pub config: Arc<AppConfig>,
    pub client: Arc<C>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            client: Arc::clone(&self.client),
        }
    }
}

impl AppState<OllamaProvider> {
    pub fn new(config: AppConfig) -> Self {
        let provider = OllamaProvider::new(Client::new(), config.ollama.clone());
        Self::with_client(config, provider)
    }
}

impl<C> AppState<C> {
    pub fn with_client(config: AppConfig, client: C) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
        }
    }

    /// The model every analysis from this server is sent to.
    pub fn model(&self) -> &str {
        &self.config.ollama.model
    }
}
