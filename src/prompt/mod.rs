mod engine;

pub use engine::TeraEngine;

use crate::agent::prompts::{ANALYST_SYSTEM_PROMPT, CRITIQUE_TEMPLATE, TASK_TEMPLATE};
use crate::error::PromptError;
use tera::Context;

const TASK: &str = "task";
const CRITIQUE: &str = "critique";

/// Raw prompt texts for one run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub system: String,
    pub task: String,
    pub critique: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            system: ANALYST_SYSTEM_PROMPT.to_string(),
            task: TASK_TEMPLATE.to_string(),
            critique: CRITIQUE_TEMPLATE.to_string(),
        }
    }
}

impl PromptSet {
    /// Parse the templates and dry-render them so a broken override fails
    /// before any model call is made.
    pub fn compile(&self) -> Result<CompiledPrompts, PromptError> {
        let mut engine = TeraEngine::new();
        engine.add_template(TASK, &self.task)?;
        engine.add_template(CRITIQUE, &self.critique)?;

        let compiled = CompiledPrompts {
            system: self.system.clone(),
            engine,
        };
        compiled.task("CHECK", None)?;
        compiled.task("CHECK", Some("check"))?;
        compiled.critique("{}")?;
        Ok(compiled)
    }
}

/// Templates parsed and ready to render.
pub struct CompiledPrompts {
    system: String,
    engine: TeraEngine,
}

impl CompiledPrompts {
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Opening user message; `feedback` is the reviewer's last rejection.
    pub fn task(&self, ticker: &str, feedback: Option<&str>) -> Result<String, PromptError> {
        let mut ctx = Context::new();
        ctx.insert("ticker", ticker);
        ctx.insert("feedback", feedback.unwrap_or_default());
        self.engine.render(TASK, &ctx)
    }

    /// Reviewer prompt embedding the candidate verbatim.
    pub fn critique(&self, assessment: &str) -> Result<String, PromptError> {
        let mut ctx = Context::new();
        ctx.insert("assessment", assessment);
        self.engine.render(CRITIQUE, &ctx)
    }
}
