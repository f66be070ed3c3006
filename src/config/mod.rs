pub mod schema;

pub use schema::{
    AgentConfig, Config, EvaluatorConfig, MAX_REVISION_CAP, ObservabilityConfig, PortfolioConfig,
    PromptsConfig,
};
