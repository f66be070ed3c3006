use crate::agent::{Assessment, RunConfig, RunResult, RunStatus, run};
use crate::error::PromptError;
use crate::scoring::{Weights, composite, resolve_material_topics};
use futures_util::{StreamExt, stream};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::info;

/// One ticker's line in a portfolio scorecard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardRow {
    pub ticker: String,
    pub industry: String,
    pub status: RunStatus,
    pub revisions: u32,
    pub round_trips: u32,
    /// Present only for a usable run whose answer decoded.
    pub assessment: Option<Assessment>,
    /// Why `assessment` is absent.
    pub error: Option<String>,
    /// Materiality weights, rounded for display.
    pub weights: Weights,
    pub weighted_composite: Option<f64>,
}

impl ScorecardRow {
    /// Score a finished run against the company's materiality weights.
    pub fn from_run(result: &RunResult) -> Self {
        let profile = resolve_material_topics(&result.ticker);
        let weights = profile.weights();

        let (assessment, error) = if result.is_usable() {
            match result.assessment() {
                Ok(assessment) => (Some(assessment), None),
                Err(e) => (None, Some(e.to_string())),
            }
        } else {
            (None, Some(format!("run ended with status {}", result.status)))
        };

        let weighted_composite = assessment
            .as_ref()
            .map(|a| composite(a.pillar_scores(), weights));

        Self {
            ticker: result.ticker.clone(),
            industry: profile.industry,
            status: result.status,
            revisions: result.revisions,
            round_trips: result.total_round_trips(),
            assessment,
            error,
            weights: weights.rounded(),
            weighted_composite,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub rows: Vec<ScorecardRow>,
}

impl Scorecard {
    pub fn scored(&self) -> impl Iterator<Item = &ScorecardRow> {
        self.rows.iter().filter(|r| r.weighted_composite.is_some())
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<8} {:<22} {:>4} {:>6} {:>6} {:>6} {:>5} {:>5} {:>5} {:>9}",
            "TICKER", "STATUS", "REV", "E", "S", "G", "wE", "wS", "wG", "COMPOSITE"
        );
        for row in &self.rows {
            let (e, s, g) = row.assessment.as_ref().map_or_else(
                || ("-".to_string(), "-".to_string(), "-".to_string()),
                |a| {
                    (
                        format!("{:.1}", a.environmental_score),
                        format!("{:.1}", a.social_score),
                        format!("{:.1}", a.governance_score),
                    )
                },
            );
            let composite = row
                .weighted_composite
                .map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));
            let _ = writeln!(
                out,
                "{:<8} {:<22} {:>4} {:>6} {:>6} {:>6} {:>5.2} {:>5.2} {:>5.2} {:>9}",
                row.ticker,
                row.status.as_str(),
                row.revisions,
                e,
                s,
                g,
                row.weights.w_e,
                row.weights.w_s,
                row.weights.w_g,
                composite
            );
            if let Some(error) = &row.error {
                let _ = writeln!(out, "         ! {error}");
            }
        }
        out
    }
}

/// Assess every ticker, at most `max_concurrency` at a time.
///
/// Rows come back in input order. A broken prompt template fails the whole
/// batch since it would fail every ticker the same way.
pub async fn assess_portfolio<S: AsRef<str>>(
    tickers: &[S],
    config: &RunConfig,
    max_concurrency: usize,
) -> Result<Scorecard, PromptError> {
    config.prompts.compile()?;

    let results: Vec<Result<RunResult, PromptError>> = stream::iter(tickers)
        .map(|ticker| run(ticker.as_ref(), config))
        .buffered(max_concurrency.max(1))
        .collect()
        .await;

    let mut rows = Vec::with_capacity(results.len());
    for result in results {
        let result = result?;
        let row = ScorecardRow::from_run(&result);
        info!(
            ticker = %row.ticker,
            status = %row.status,
            revisions = row.revisions,
            composite = ?row.weighted_composite,
            "portfolio.run_complete"
        );
        rows.push(row);
    }
    Ok(Scorecard { rows })
}
