use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Tickers assessed at the same time.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    #[serde(default = "default_consistency_runs")]
    pub consistency_runs: u32,
    #[serde(default = "default_consistency_max_revisions")]
    pub consistency_max_revisions: u32,
    /// Score range above which a column is flagged unstable.
    #[serde(default = "default_instability_threshold")]
    pub instability_threshold: f64,
}

fn default_max_concurrency() -> usize {
    4
}

fn default_consistency_runs() -> u32 {
    3
}

fn default_consistency_max_revisions() -> u32 {
    2
}

fn default_instability_threshold() -> f64 {
    10.0
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            consistency_runs: default_consistency_runs(),
            consistency_max_revisions: default_consistency_max_revisions(),
            instability_threshold: default_instability_threshold(),
        }
    }
}
