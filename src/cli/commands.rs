use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `esg-screener` - materiality-weighted ESG scoring with a model critic.
#[derive(Parser, Debug)]
#[command(name = "esg-screener")]
#[command(version)]
#[command(about = "Research and score companies on ESG pillars.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.esg-screener/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess one company and have the critic review it
    Assess {
        /// Stock ticker, e.g. AAPL
        ticker: String,

        /// Revision budget for this run (default from config)
        #[arg(long)]
        max_revisions: Option<u32>,

        /// Print the full run result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assess several companies and print a weighted scorecard
    Portfolio {
        /// Stock tickers
        #[arg(required = true)]
        tickers: Vec<String>,

        /// Print the scorecard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Repeat the assessment of one company and report score drift
    Consistency {
        /// Stock ticker
        ticker: String,

        /// Number of repetitions (default from config)
        #[arg(long)]
        runs: Option<u32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the industry, material topics, and pillar weights for a ticker
    Materiality {
        /// Stock ticker
        ticker: String,
    },
}
