use esg_screener::agent::RunResult;
use esg_screener::portfolio::ScorecardRow;
use esg_screener::scoring::MaterialityProfile;

pub fn render_run(result: &RunResult, row: &ScorecardRow) -> String {
    let mut lines = vec![
        format!("◆ {} ({})", result.ticker, row.industry),
        String::new(),
        format!("  status        {}", result.status),
        format!("  revisions     {}", result.revisions),
        format!(
            "  round-trips   {} ({} generation, {} critique)",
            result.total_round_trips(),
            result.generation_iterations,
            result.critique_calls
        ),
        format!("  run id        {}", result.run_id),
        format!("  elapsed       {} ms", result.duration_ms()),
        String::new(),
        "  trace".to_string(),
    ];

    if result.trace.is_empty() {
        lines.push("    (empty)".to_string());
    }
    for entry in &result.trace {
        lines.push(format!("    {entry}"));
    }

    lines.push(String::new());
    match &row.assessment {
        Some(assessment) => {
            lines.push(format!(
                "  scores        E {:.1}  S {:.1}  G {:.1}",
                assessment.environmental_score,
                assessment.social_score,
                assessment.governance_score
            ));
            lines.push(format!(
                "  weights       wE {:.2}  wS {:.2}  wG {:.2}",
                row.weights.w_e, row.weights.w_s, row.weights.w_g
            ));
            if let Some(composite) = row.weighted_composite {
                lines.push(format!("  composite     {composite:.2}"));
            }
            if !assessment.recommendation.is_empty() {
                lines.push(format!("  verdict       {}", assessment.recommendation));
            }
        }
        None => {
            lines.push(format!(
                "  no scores     {}",
                row.error.as_deref().unwrap_or("unavailable")
            ));
            lines.push(String::new());
            lines.push(result.answer.clone());
        }
    }

    lines.join("\n")
}

pub fn render_materiality(profile: &MaterialityProfile) -> String {
    let counts = profile.counts();
    let weights = profile.weights().rounded();

    let mut lines = vec![
        format!("◆ {} ({})", profile.ticker, profile.industry),
        String::new(),
        "  material topics".to_string(),
    ];
    for topic in &profile.material_topics {
        let pillar = esg_screener::scoring::classify_topic(topic)
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        lines.push(format!("    [{pillar}] {topic}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "  counts        E {}  S {}  G {}",
        counts.environmental, counts.social, counts.governance
    ));
    lines.push(format!(
        "  weights       wE {:.2}  wS {:.2}  wG {:.2}",
        weights.w_e, weights.w_s, weights.w_g
    ));
    lines.join("\n")
}
