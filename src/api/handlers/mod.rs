// src/api/handlers/mod.rs
mod analyze;
mod assets;
mod health;
mod page;

pub use analyze::{AnalyzeRequestBody, AnalyzeResponse, analyze};
pub use assets::static_asset;
pub use health::health_check;
pub use page::{AnalyzeForm, form_error, index, submit};
