//! Batch runs over many tickers, and repeated runs over one.
//!
//! Every run is independent, so both entry points simply fan out the
//! revision loop and join the results in order.

pub mod consistency;
pub mod scorecard;

pub use consistency::{
    ColumnStats, ConsistencyReport, DEFAULT_INSTABILITY_THRESHOLD, ScoreSample, SkippedRun,
    column_stats, run_consistency_check,
};
pub use scorecard::{Scorecard, ScorecardRow, assess_portfolio};
