use super::extract::strip_fence;
use super::service::CallGuard;
use super::trace::TraceEntry;
use crate::error::{ServiceError, ToolError};
use crate::llm::{ChatSettings, Provider, ProviderMessage, ToolCallRequest};
use crate::tools::ToolRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

// ── Constants ────────────────────────────────────────────────────────────────

/// Answer text reported when the iteration ceiling is hit.
pub const CEILING_MESSAGE: &str =
    "Max iterations reached without generating a final JSON assessment.";

pub const DEFAULT_MAX_ITERATIONS: u32 = 15;
pub const DEFAULT_PREVIEW_CHARS: usize = 300;

// ── Public types ─────────────────────────────────────────────────────────────

/// Drives one conversation with the model until it stops asking for tools.
pub struct ToolLoop {
    registry: Arc<ToolRegistry>,
    max_iterations: u32,
    preview_chars: usize,
}

/// Parameters for a single [`ToolLoop::run`] invocation.
pub struct ToolLoopRunParams<'a> {
    pub provider: &'a dyn Provider,
    pub system_prompt: &'a str,
    pub task_message: &'a str,
    pub settings: &'a ChatSettings,
    pub guard: &'a CallGuard,
}

/// Why the loop terminated.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopOutcome {
    /// The model answered without tool calls; fenced wrapper text removed.
    Completed(String),
    /// The iteration ceiling was reached while the model still wanted tools.
    CeilingReached,
    /// The completion service failed at `iteration`.
    ServiceFailed { iteration: u32, error: ServiceError },
}

/// Final output of a [`ToolLoop::run`] invocation.
#[derive(Debug, Clone)]
pub struct ToolLoopResult {
    pub outcome: LoopOutcome,
    pub trace: Vec<TraceEntry>,
    /// Model round-trips that produced a response.
    pub iterations: u32,
}

impl ToolLoopResult {
    /// The final answer, or the sentinel text for a failed run.
    pub fn answer(&self) -> String {
        match &self.outcome {
            LoopOutcome::Completed(answer) => answer.clone(),
            LoopOutcome::CeilingReached => CEILING_MESSAGE.to_string(),
            LoopOutcome::ServiceFailed { iteration, error } => {
                format!("Error: LLM invocation failed after {iteration} steps. {error}")
            }
        }
    }

    /// `true` when no final answer was produced.
    pub fn is_failure(&self) -> bool {
        !matches!(self.outcome, LoopOutcome::Completed(_))
    }
}

// ── Implementation ───────────────────────────────────────────────────────────

impl ToolLoop {
    pub fn new(registry: Arc<ToolRegistry>, max_iterations: u32) -> Self {
        Self {
            registry,
            max_iterations,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    /// Cap on characters of tool output kept per trace entry.
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    /// Run the loop to completion.
    ///
    /// Each iteration sends the whole conversation plus every tool schema.
    /// Requested tools run one at a time in the order the model listed them;
    /// missing tools and handler failures are fed back to the model as tool
    /// results. A completion-service failure ends the run at once.
    pub async fn run(&self, params: ToolLoopRunParams<'_>) -> ToolLoopResult {
        let tools = self.registry.specs();
        let mut messages = vec![
            ProviderMessage::system(params.system_prompt),
            ProviderMessage::user(params.task_message),
        ];
        let mut trace = Vec::new();

        for iteration in 0..self.max_iterations {
            debug!(
                iteration,
                messages = messages.len(),
                model = %params.settings.model,
                "agent.request"
            );

            let response = match params
                .guard
                .complete(params.provider, &messages, &tools, params.settings)
                .await
            {
                Ok(response) => response,
                Err(error) => {
                    warn!(iteration, error = %error, "agent.service_failed");
                    trace.push(TraceEntry::ServiceFailure {
                        iteration,
                        message: format!("LLM invocation failed: {error}"),
                    });
                    return ToolLoopResult {
                        outcome: LoopOutcome::ServiceFailed { iteration, error },
                        trace,
                        iterations: iteration,
                    };
                }
            };

            if !response.has_tool_use() {
                let answer = strip_fence(&response.text).to_string();
                info!(
                    iterations = iteration + 1,
                    answer_chars = answer.len(),
                    "agent.final_answer"
                );
                return ToolLoopResult {
                    outcome: LoopOutcome::Completed(answer),
                    trace,
                    iterations: iteration + 1,
                };
            }

            messages.push(response.to_assistant_message());
            for call in response.tool_calls() {
                let (content, is_error) = self.dispatch(&call);
                trace.push(TraceEntry::tool_action(
                    iteration,
                    &call.name,
                    &call.arguments,
                    &content,
                    self.preview_chars,
                ));
                messages.push(ProviderMessage::tool_result(call.id, content, is_error));
            }
        }

        warn!(max_iterations = self.max_iterations, "agent.ceiling_reached");
        ToolLoopResult {
            outcome: LoopOutcome::CeilingReached,
            trace,
            iterations: self.max_iterations,
        }
    }

    /// Run one requested tool. Returns the tool-result text and whether it
    /// reports an error.
    fn dispatch(&self, call: &ToolCallRequest) -> (String, bool) {
        match self.registry.invoke(&call.name, &call.arguments) {
            Ok(output) => {
                info!(tool = %call.name, output_chars = output.len(), "agent.tool_call");
                (output, false)
            }
            Err(err @ ToolError::NotFound { .. }) => {
                warn!(tool = %call.name, "agent.tool_missing");
                (err.to_string(), true)
            }
            Err(err) => {
                warn!(tool = %call.name, error = %err, "agent.tool_failed");
                (err.to_string(), true)
            }
        }
    }
}
