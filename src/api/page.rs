// src/api/page.rs
//! Server-side rendering of the single analysis page.

use regex::Regex;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::errors::{AssistantError, Result};

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

pub const PAGE_TEMPLATE: &str = "index.html";
pub const INPUT_ERROR: &str = "Please provide both the Source Code and the Error Traceback.";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// What the region under the form shows after a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Empty,
    Invalid(String),
    Report(String),
    Failed(String),
}

pub struct PageView<'a> {
    pub model: &'a str,
    pub code: &'a str,
    pub traceback: &'a str,
    pub outcome: Outcome,
}

impl<'a> PageView<'a> {
    pub fn empty(model: &'a str) -> Self {
        Self {
            model,
            code: "",
            traceback: "",
            outcome: Outcome::Empty,
        }
    }
}

pub fn render_page(view: &PageView<'_>) -> Result<String> {
    let template = StaticAssets::get(PAGE_TEMPLATE).ok_or_else(|| {
        AssistantError::Config(format!("page template '{}' is not embedded", PAGE_TEMPLATE))
    })?;
    let template = String::from_utf8_lossy(&template.data);

    let mut values = HashMap::new();
    values.insert("version", escape_html(env!("CARGO_PKG_VERSION")));
    values.insert("model", escape_html(view.model));
    values.insert("code", escape_html(view.code));
    values.insert("traceback", escape_html(view.traceback));
    values.insert("result", render_outcome(view.model, &view.outcome));

    Ok(render_template(&template, &values))
}

fn render_outcome(model: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Empty => String::new(),
        Outcome::Invalid(message) => format!(
            r#"<div class="notice error" role="alert">{}</div>"#,
            escape_html(message)
        ),
        Outcome::Report(report) => format!(
            r#"<section class="report">
  <h2>✅ Debugging Report</h2>
  <p class="notice info">Analysis performed by {}.</p>
  <pre class="report-body">{}</pre>
</section>"#,
            escape_html(model),
            escape_html(report)
        ),
        Outcome::Failed(message) => format!(
            r#"<section class="report">
  <h2>Debugging Report</h2>
  <div class="notice error" role="alert">{}</div>
</section>"#,
            escape_html(message)
        ),
    }
}

/// Replaces `{{key}}` placeholders in one pass; unknown keys are kept as-is.
fn render_template(template: &str, values: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| {
            values
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
