use super::result::{RunResult, RunStatus};
use super::service::CallGuard;
use super::tool_loop::{DEFAULT_MAX_ITERATIONS, DEFAULT_PREVIEW_CHARS, ToolLoop, ToolLoopRunParams};
use super::trace::TraceEntry;
use super::verdict::{Verdict, VerdictStatus};
use crate::error::PromptError;
use crate::llm::{ChatSettings, Provider, ProviderMessage};
use crate::prompt::PromptSet;
use crate::tools::ToolRegistry;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

pub const DEFAULT_MAX_REVISIONS: u32 = 1;
pub const DEFAULT_FEEDBACK: &str = "No specific feedback provided.";

// ── Configuration ────────────────────────────────────────────────────────────

/// Everything [`run`] needs. Cheap to clone; every handle is shared.
#[derive(Clone)]
pub struct RunConfig {
    pub generator: Arc<dyn Provider>,
    pub critic: Arc<dyn Provider>,
    pub registry: Arc<ToolRegistry>,
    pub prompts: PromptSet,
    pub agent_settings: ChatSettings,
    pub critic_settings: ChatSettings,
    pub max_iterations: u32,
    pub max_revisions: u32,
    pub trace_preview_chars: usize,
    pub call_timeout: Option<Duration>,
    pub cancel: CancellationToken,
}

impl RunConfig {
    pub fn new(
        generator: Arc<dyn Provider>,
        critic: Arc<dyn Provider>,
        registry: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            generator,
            critic,
            registry,
            prompts: PromptSet::default(),
            agent_settings: ChatSettings::new("gpt-4o", 0.2),
            critic_settings: ChatSettings::new("gpt-4o", 0.0).with_json_output(true),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_revisions: DEFAULT_MAX_REVISIONS,
            trace_preview_chars: DEFAULT_PREVIEW_CHARS,
            call_timeout: None,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_max_revisions(mut self, max_revisions: u32) -> Self {
        self.max_revisions = max_revisions;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_prompts(mut self, prompts: PromptSet) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

// ── Revision loop ────────────────────────────────────────────────────────────

/// Generate an assessment for `ticker`, then let the critic approve it or
/// send it back, up to `config.max_revisions` times.
///
/// Only a template that fails to render is an `Err`; every service, tool, or
/// parsing failure ends up as a [`RunStatus`] on the result.
pub async fn run(ticker: &str, config: &RunConfig) -> Result<RunResult, PromptError> {
    let prompts = config.prompts.compile()?;
    let ticker = ticker.trim().to_uppercase();
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();

    let guard = CallGuard::new(config.call_timeout, config.cancel.clone());
    let tool_loop = ToolLoop::new(Arc::clone(&config.registry), config.max_iterations)
        .with_preview_chars(config.trace_preview_chars);

    info!(%run_id, ticker = %ticker, max_revisions = config.max_revisions, "evaluator.start");

    let task = prompts.task(&ticker, None)?;
    let initial = tool_loop
        .run(ToolLoopRunParams {
            provider: config.generator.as_ref(),
            system_prompt: prompts.system(),
            task_message: &task,
            settings: &config.agent_settings,
            guard: &guard,
        })
        .await;

    let finish = |answer: String,
                  status: RunStatus,
                  revisions: u32,
                  trace: Vec<TraceEntry>,
                  generation_iterations: u32,
                  critique_calls: u32| {
        RunResult {
            run_id,
            ticker: ticker.clone(),
            answer,
            status,
            revisions,
            trace,
            generation_iterations,
            critique_calls,
            started_at,
            finished_at: Utc::now(),
        }
    };

    if initial.is_failure() {
        warn!(%run_id, ticker = %ticker, "evaluator.initial_failed");
        let answer = initial.answer();
        return Ok(finish(
            answer,
            RunStatus::Failed,
            0,
            initial.trace,
            initial.iterations,
            0,
        ));
    }

    let mut candidate = initial.answer();
    let mut trace = initial.trace;
    let mut generation_iterations = initial.iterations;
    let mut critique_calls = 0;

    for revision in 0..config.max_revisions {
        let critique = prompts.critique(&candidate)?;
        critique_calls += 1;
        let verdict = evaluate(config, &guard, &critique).await;

        info!(
            %run_id,
            revision,
            status = %verdict.status,
            "evaluator.verdict"
        );
        trace.push(TraceEntry::Verdict {
            revision,
            status: verdict.status,
            feedback: verdict.feedback.clone(),
        });

        if verdict.status == VerdictStatus::Approved {
            return Ok(finish(
                candidate,
                RunStatus::Approved,
                revision,
                trace,
                generation_iterations,
                critique_calls,
            ));
        }

        let task = prompts.task(&ticker, Some(&verdict.feedback))?;
        let retry = tool_loop
            .run(ToolLoopRunParams {
                provider: config.generator.as_ref(),
                system_prompt: prompts.system(),
                task_message: &task,
                settings: &config.agent_settings,
                guard: &guard,
            })
            .await;

        let retry_failed = retry.is_failure();
        let retry_answer = retry.answer();
        trace.extend(retry.trace);
        generation_iterations += retry.iterations;

        if retry_failed {
            warn!(%run_id, revision, answer = %retry_answer, "evaluator.retry_failed");
            return Ok(finish(
                candidate,
                RunStatus::FailedRevision,
                revision + 1,
                trace,
                generation_iterations,
                critique_calls,
            ));
        }
        candidate = retry_answer;
    }

    info!(%run_id, max_revisions = config.max_revisions, "evaluator.max_revisions");
    Ok(finish(
        candidate,
        RunStatus::MaxRevisionsReached,
        config.max_revisions,
        trace,
        generation_iterations,
        critique_calls,
    ))
}

/// Ask the critic for a verdict. Never fails: a service error or an
/// unreadable reply becomes REVISE with a feedback line saying so.
async fn evaluate(config: &RunConfig, guard: &CallGuard, critique: &str) -> Verdict {
    let messages = [ProviderMessage::system(critique)];
    let mut verdict = match guard
        .complete(config.critic.as_ref(), &messages, &[], &config.critic_settings)
        .await
    {
        Ok(response) => Verdict::parse(&response.text)
            .unwrap_or_else(|e| Verdict::revise(format!("Evaluator response malformed: {e}"))),
        Err(e) => Verdict::revise(format!("Evaluator LLM error: {e}")),
    };

    if verdict.status == VerdictStatus::Revise && verdict.feedback.trim().is_empty() {
        verdict.feedback = DEFAULT_FEEDBACK.to_string();
    }
    verdict
}
