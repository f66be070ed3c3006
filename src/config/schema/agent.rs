use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_agent_temperature")]
    pub temperature: f64,
    /// Model round-trips allowed per generation attempt.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Characters of each tool result kept in the trace.
    #[serde(default = "default_trace_preview_chars")]
    pub trace_preview_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default = "default_max_revisions")]
    pub max_revisions: u32,
    /// Ask the critic for a JSON-object reply.
    #[serde(default = "default_true")]
    pub json_mode: bool,
}

fn default_model() -> String {
    "gpt-4o".into()
}

fn default_agent_temperature() -> f64 {
    0.2
}

fn default_max_iterations() -> u32 {
    15
}

fn default_trace_preview_chars() -> usize {
    300
}

fn default_max_revisions() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_agent_temperature(),
            max_iterations: default_max_iterations(),
            trace_preview_chars: default_trace_preview_chars(),
        }
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: 0.0,
            max_revisions: default_max_revisions(),
            json_mode: true,
        }
    }
}
