use super::super::{
    AgentConfig, EvaluatorConfig, ObservabilityConfig, PortfolioConfig, PromptsConfig,
};
use crate::agent::RunConfig;
use crate::error::ConfigError;
use crate::llm::{ChatSettings, Provider};
use crate::tools::ToolRegistry;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Hard ceiling on any configured revision budget.
pub const MAX_REVISION_CAP: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub api_key: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub evaluator: EvaluatorConfig,

    #[serde(default)]
    pub portfolio: PortfolioConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub prompts: PromptsConfig,
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_request_timeout_secs() -> u64 {
    120
}

pub(super) fn screener_dir() -> Option<PathBuf> {
    UserDirs::new().map(|u| u.home_dir().join(".esg-screener"))
}

impl Default for Config {
    fn default() -> Self {
        let config_path = screener_dir()
            .unwrap_or_else(|| PathBuf::from(".esg-screener"))
            .join("config.toml");

        Self {
            config_path,
            api_key: None,
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            agent: AgentConfig::default(),
            evaluator: EvaluatorConfig::default(),
            portfolio: PortfolioConfig::default(),
            observability: ObservabilityConfig::default(),
            prompts: PromptsConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Validation(msg));

        if self.agent.max_iterations == 0 {
            return invalid("agent.max_iterations must be at least 1".into());
        }
        if self.agent.trace_preview_chars == 0 {
            return invalid("agent.trace_preview_chars must be at least 1".into());
        }
        for (label, temp) in [
            ("agent.temperature", self.agent.temperature),
            ("evaluator.temperature", self.evaluator.temperature),
        ] {
            if !(0.0..=2.0).contains(&temp) {
                return invalid(format!("{label} must be within [0, 2], got {temp}"));
            }
        }
        for (label, revisions) in [
            ("evaluator.max_revisions", self.evaluator.max_revisions),
            (
                "portfolio.consistency_max_revisions",
                self.portfolio.consistency_max_revisions,
            ),
        ] {
            if revisions > MAX_REVISION_CAP {
                return invalid(format!(
                    "{label} must be at most {MAX_REVISION_CAP}, got {revisions}"
                ));
            }
        }
        if self.portfolio.max_concurrency == 0 {
            return invalid("portfolio.max_concurrency must be at least 1".into());
        }
        let threshold = self.portfolio.instability_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return invalid(format!(
                "portfolio.instability_threshold must be a finite, non-negative number, got {threshold}"
            ));
        }
        Ok(())
    }

    pub fn agent_settings(&self) -> ChatSettings {
        ChatSettings::new(&self.agent.model, self.agent.temperature)
    }

    pub fn critic_settings(&self) -> ChatSettings {
        ChatSettings::new(&self.evaluator.model, self.evaluator.temperature)
            .with_json_output(self.evaluator.json_mode)
    }

    /// Revision-loop configuration around the given service handles.
    pub fn run_config(
        &self,
        generator: Arc<dyn Provider>,
        critic: Arc<dyn Provider>,
        registry: Arc<ToolRegistry>,
    ) -> RunConfig {
        let mut run = RunConfig::new(generator, critic, registry)
            .with_max_iterations(self.agent.max_iterations)
            .with_max_revisions(self.evaluator.max_revisions)
            .with_prompts(self.prompts.prompt_set())
            .with_call_timeout(Some(Duration::from_secs(self.request_timeout_secs)));
        run.agent_settings = self.agent_settings();
        run.critic_settings = self.critic_settings();
        run.trace_preview_chars = self.agent.trace_preview_chars;
        run
    }
}
