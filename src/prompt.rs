// src/prompt.rs
use crate::models::AnalysisRequest;

/// Fixed instruction steering the model into the three-section report.
pub const SYSTEM_INSTRUCTION: &str = "You are a Senior Software Debugging Expert. \
Your task is to analyze the provided code and traceback and provide a three-part structured response ONLY. \
1. A section titled 'Root Cause:' explaining the exact reason for the error. \
2. A section titled 'Line of Fix:' indicating the specific line number and file. \
3. A section titled 'Suggested Code Fix:' providing the corrected, complete code block using markdown syntax. \
Be concise, professional, and accurate.";

/// Report section headers the system instruction asks for.
pub const REPORT_SECTIONS: [&str; 3] = ["Root Cause:", "Line of Fix:", "Suggested Code Fix:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

/// Builds the instruction pair for one analysis.
///
/// The code and traceback are interpolated verbatim: nothing is escaped and
/// nothing is truncated, so arbitrarily large inputs reach the model as-is.
pub fn build_prompt(request: &AnalysisRequest) -> Prompt {
    let user = format!(
        r#"Analyze the following:

### CODE TO ANALYZE:
{}

### TRACEBACK/ERROR MESSAGE:
{}
"#,
        request.code(),
        request.traceback()
    );

    Prompt {
        system: SYSTEM_INSTRUCTION,
        user,
    }
}
