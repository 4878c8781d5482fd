//! Chain-of-thought output formatting
//!
//! Deterministic wrapping of finished steps: every step's snippet goes into
//! a fenced block tagged with its version, explanations stand between the
//! fences as plain paragraphs, and the whole trace is framed by a fixed
//! opening and closing sentence.

use crate::argdown::strategies::CotStep;

/// The fixed opening sentence of every trace.
pub const TRACE_PREAMBLE: &str = "Let me build the Argdown code snippet step by step.";

/// Render finished steps into the final trace text.
pub fn format_trace(steps: &[CotStep]) -> String {
    let mut lines: Vec<String> = vec![TRACE_PREAMBLE.to_string(), String::new()];

    for step in steps {
        if !step.explanation.is_empty() {
            lines.push(step.explanation.clone());
            lines.push(String::new());
        }
        if !step.content.trim().is_empty() {
            lines.push(format!("```argdown {{version='{}'}}", step.version));
            lines.push(step.content.clone());
            lines.push("```".to_string());
            lines.push(String::new());
        }
    }

    if let Some(last) = steps.last() {
        lines.push(format!(
            "I've created the Argdown code snippet and may submit version='{}'.",
            last.version
        ));
    }

    lines.join("\n")
}
