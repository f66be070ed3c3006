use super::verdict::VerdictStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One append-only audit record of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEntry {
    /// A tool call dispatched by the generation loop (including calls that
    /// named a missing tool or whose handler failed).
    ToolAction {
        iteration: u32,
        action: String,
        result_preview: String,
    },
    /// The completion service failed and the generation loop stopped.
    ServiceFailure { iteration: u32, message: String },
    /// A critic decision.
    Verdict {
        revision: u32,
        status: VerdictStatus,
        feedback: String,
    },
}

impl TraceEntry {
    pub fn tool_action(
        iteration: u32,
        name: &str,
        args: &Value,
        result: &str,
        preview_chars: usize,
    ) -> Self {
        Self::ToolAction {
            iteration,
            action: format_action(name, args),
            result_preview: preview(result, preview_chars),
        }
    }

    pub fn is_tool_action(&self) -> bool {
        matches!(self, Self::ToolAction { .. })
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolAction {
                iteration,
                action,
                result_preview,
            } => write!(f, "[step {iteration}] {action} -> {result_preview}"),
            Self::ServiceFailure { iteration, message } => {
                write!(f, "[step {iteration}] service failure: {message}")
            }
            Self::Verdict {
                revision,
                status,
                feedback,
            } => {
                if feedback.is_empty() {
                    write!(f, "[revision {revision}] {status}")
                } else {
                    write!(f, "[revision {revision}] {status}: {feedback}")
                }
            }
        }
    }
}

/// `name({"arg":"value"})`
pub fn format_action(name: &str, args: &Value) -> String {
    format!("{name}({args})")
}

/// First `max_chars` characters, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
