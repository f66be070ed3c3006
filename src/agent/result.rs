use super::assessment::Assessment;
use super::trace::TraceEntry;
use crate::error::ExtractionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Terminal state of a revision loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Approved,
    /// Usable but never approved.
    MaxRevisionsReached,
    /// The first generation attempt produced no answer.
    Failed,
    /// A retry broke; the result keeps the previous candidate.
    FailedRevision,
}

impl RunStatus {
    /// Whether scores from this run may be aggregated.
    pub fn is_usable(self) -> bool {
        matches!(self, Self::Approved | Self::MaxRevisionsReached)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::MaxRevisionsReached => "MAX_REVISIONS_REACHED",
            Self::Failed => "FAILED",
            Self::FailedRevision => "FAILED_REVISION",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one end-to-end run hands back. Never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub run_id: Uuid,
    pub ticker: String,
    /// Final candidate text, or the failure sentinel when status is FAILED.
    pub answer: String,
    pub status: RunStatus,
    pub revisions: u32,
    pub trace: Vec<TraceEntry>,
    pub generation_iterations: u32,
    pub critique_calls: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunResult {
    pub fn total_round_trips(&self) -> u32 {
        self.generation_iterations + self.critique_calls
    }

    pub fn is_usable(&self) -> bool {
        self.status.is_usable()
    }

    /// Decode the final candidate. Callers should check [`Self::is_usable`]
    /// first; a FAILED run's answer is a sentinel and yields `NoMatch`.
    pub fn assessment(&self) -> Result<Assessment, ExtractionError> {
        Assessment::from_model_output(&self.answer)
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
