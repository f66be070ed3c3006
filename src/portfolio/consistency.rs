use crate::agent::{RunConfig, RunStatus, run};
use crate::error::PromptError;
use crate::scoring::{composite, resolve_material_topics};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{info, warn};
use uuid::Uuid;

pub const DEFAULT_INSTABILITY_THRESHOLD: f64 = 10.0;

const COLUMNS: [&str; 4] = ["E", "S", "G", "Composite_Materiality_Weighted"];

/// Scores from one usable repetition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSample {
    pub run_id: Uuid,
    pub status: RunStatus,
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub weighted_composite: f64,
}

impl ScoreSample {
    fn column(&self, index: usize) -> f64 {
        match index {
            0 => self.environmental,
            1 => self.social,
            2 => self.governance,
            _ => self.weighted_composite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRun {
    pub run_id: Uuid,
    pub status: RunStatus,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column: String,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub unstable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub ticker: String,
    pub runs: u32,
    pub threshold: f64,
    pub samples: Vec<ScoreSample>,
    pub skipped: Vec<SkippedRun>,
    /// Empty when no repetition produced usable scores.
    pub columns: Vec<ColumnStats>,
}

impl ConsistencyReport {
    pub fn is_unstable(&self) -> bool {
        self.columns.iter().any(|c| c.unstable)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "consistency {} runs={} usable={} skipped={} threshold={}",
            self.ticker,
            self.runs,
            self.samples.len(),
            self.skipped.len(),
            self.threshold
        );
        let _ = writeln!(
            out,
            "{:<32} {:>8} {:>8} {:>8}  FLAG",
            "COLUMN", "MIN", "MAX", "RANGE"
        );
        for col in &self.columns {
            let _ = writeln!(
                out,
                "{:<32} {:>8.2} {:>8.2} {:>8.2}  {}",
                col.column,
                col.min,
                col.max,
                col.range,
                if col.unstable { "UNSTABLE" } else { "ok" }
            );
        }
        for skip in &self.skipped {
            let _ = writeln!(out, "skipped {} ({}): {}", skip.run_id, skip.status, skip.reason);
        }
        out
    }
}

/// Per-column spread of the samples. A column is unstable when its range
/// exceeds `threshold`.
pub fn column_stats(samples: &[ScoreSample], threshold: f64) -> Vec<ColumnStats> {
    if samples.is_empty() {
        return Vec::new();
    }
    COLUMNS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let values = samples.iter().map(|s| s.column(index));
            let min = values.clone().fold(f64::INFINITY, f64::min);
            let max = values.fold(f64::NEG_INFINITY, f64::max);
            let range = max - min;
            ColumnStats {
                column: (*name).to_string(),
                min,
                max,
                range,
                unstable: range > threshold,
            }
        })
        .collect()
}

/// Run the full revision loop `runs` times for one ticker and measure how far
/// the scores drift. `config.max_revisions` is used as given.
pub async fn run_consistency_check(
    ticker: &str,
    runs: u32,
    config: &RunConfig,
    threshold: f64,
) -> Result<ConsistencyReport, PromptError> {
    config.prompts.compile()?;
    let weights = resolve_material_topics(ticker).weights();

    let results = join_all((0..runs).map(|_| run(ticker, config))).await;

    let mut samples = Vec::new();
    let mut skipped = Vec::new();
    let mut normalized = ticker.trim().to_uppercase();
    for result in results {
        let result = result?;
        normalized.clone_from(&result.ticker);

        if !result.is_usable() {
            skipped.push(SkippedRun {
                run_id: result.run_id,
                status: result.status,
                reason: format!("run ended with status {}", result.status),
            });
            continue;
        }

        match result.assessment() {
            Ok(assessment) => samples.push(ScoreSample {
                run_id: result.run_id,
                status: result.status,
                environmental: assessment.environmental_score,
                social: assessment.social_score,
                governance: assessment.governance_score,
                weighted_composite: composite(assessment.pillar_scores(), weights),
            }),
            Err(e) => skipped.push(SkippedRun {
                run_id: result.run_id,
                status: result.status,
                reason: e.to_string(),
            }),
        }
    }

    let columns = column_stats(&samples, threshold);
    let report = ConsistencyReport {
        ticker: normalized,
        runs,
        threshold,
        samples,
        skipped,
        columns,
    };

    if report.is_unstable() {
        warn!(ticker = %report.ticker, "consistency.unstable");
    } else {
        info!(
            ticker = %report.ticker,
            usable = report.samples.len(),
            "consistency.complete"
        );
    }
    Ok(report)
}
