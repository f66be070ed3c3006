use crate::app::render::{render_materiality, render_run};
use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use esg_screener::Config;
use esg_screener::agent::{RunConfig, RunResult, run};
use esg_screener::config::MAX_REVISION_CAP;
use esg_screener::llm::{OpenAiCompatibleProvider, Provider};
use esg_screener::portfolio::{ScorecardRow, assess_portfolio, run_consistency_check};
use esg_screener::scoring::resolve_material_topics;
use esg_screener::tools::default_registry;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Serialize)]
struct AssessOutput<'a> {
    run: &'a RunResult,
    scorecard: &'a ScorecardRow,
}

/// Wire the configured completion service, the built-in tools, and a
/// Ctrl-C cancellation token into a revision-loop configuration.
fn build_run_config(config: &Config) -> Result<RunConfig> {
    if config.api_key.is_none() {
        bail!(
            "no API key configured; set ESG_SCREENER_API_KEY or OPENAI_API_KEY, or add api_key to {}",
            config.config_path.display()
        );
    }

    let provider: Arc<dyn Provider> = Arc::new(OpenAiCompatibleProvider::new(
        &config.api_base_url,
        config.api_key.as_deref(),
        config.request_timeout_secs,
    ));
    let registry = Arc::new(default_registry());

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received; cancelling in-flight requests");
            on_interrupt.cancel();
        }
    });

    Ok(config
        .run_config(Arc::clone(&provider), provider, registry)
        .with_cancel(cancel))
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Assess {
            ticker,
            max_revisions,
            json,
        } => {
            let mut run_config = build_run_config(&config)?;
            if let Some(max_revisions) = max_revisions {
                if max_revisions > MAX_REVISION_CAP {
                    bail!("--max-revisions must be at most {MAX_REVISION_CAP}");
                }
                run_config.max_revisions = max_revisions;
            }

            let result = run(&ticker, &run_config)
                .await
                .context("prompt templates failed to render")?;
            let row = ScorecardRow::from_run(&result);

            if json {
                let payload = AssessOutput {
                    run: &result,
                    scorecard: &row,
                };
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{}", render_run(&result, &row));
            }
            Ok(())
        }

        Commands::Portfolio { tickers, json } => {
            let run_config = build_run_config(&config)?;
            let scorecard =
                assess_portfolio(&tickers, &run_config, config.portfolio.max_concurrency)
                    .await
                    .context("prompt templates failed to render")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&scorecard)?);
            } else {
                print!("{}", scorecard.render_text());
            }
            Ok(())
        }

        Commands::Consistency { ticker, runs, json } => {
            let runs = runs.unwrap_or(config.portfolio.consistency_runs);
            if runs == 0 {
                bail!("--runs must be at least 1");
            }
            let run_config = build_run_config(&config)?
                .with_max_revisions(config.portfolio.consistency_max_revisions);
            let report = run_consistency_check(
                &ticker,
                runs,
                &run_config,
                config.portfolio.instability_threshold,
            )
            .await
            .context("prompt templates failed to render")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(())
        }

        Commands::Materiality { ticker } => {
            println!("{}", render_materiality(&resolve_material_topics(&ticker)));
            Ok(())
        }
    }
}
