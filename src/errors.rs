// src/errors.rs
use thiserror::Error;

/// Input problems caught before any call to the model service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide both the code and the traceback (the code is missing).")]
    MissingCode,

    #[error("Please provide both the code and the traceback (the traceback is missing).")]
    MissingTraceback,
}

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Received empty text response from model")]
    EmptyResponse,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "Error contacting the model service: {source}. Ensure Ollama is running and model '{model}' is pulled locally."
    )]
    Service {
        model: String,
        #[source]
        source: Box<AssistantError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, AssistantError>;
