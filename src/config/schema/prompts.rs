use crate::prompt::PromptSet;
use serde::{Deserialize, Serialize};

/// Optional replacements for the built-in prompt texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Analyst instructions sent as the system message.
    #[serde(default)]
    pub system: Option<String>,
    /// Task message template (`ticker`, `feedback`).
    #[serde(default)]
    pub task: Option<String>,
    /// Critique checklist template (`assessment`).
    #[serde(default)]
    pub critique: Option<String>,
}

impl PromptsConfig {
    pub fn prompt_set(&self) -> PromptSet {
        let mut set = PromptSet::default();
        if let Some(system) = &self.system {
            set.system.clone_from(system);
        }
        if let Some(task) = &self.task {
            set.task.clone_from(task);
        }
        if let Some(critique) = &self.critique {
            set.critique.clone_from(critique);
        }
        set
    }
}
