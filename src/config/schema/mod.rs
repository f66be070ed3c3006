mod agent;
mod core;
mod observability;
mod portfolio;
mod prompts;

pub use agent::{AgentConfig, EvaluatorConfig};
pub use core::{Config, MAX_REVISION_CAP};
pub use observability::ObservabilityConfig;
pub use portfolio::PortfolioConfig;
pub use prompts::PromptsConfig;
