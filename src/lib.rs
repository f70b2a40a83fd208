// src/lib.rs
pub mod analyzer;
pub mod api;
pub mod banner;
pub mod config;
pub mod desktop;
pub mod errors;
pub mod models;
pub mod prompt;
pub mod providers;
