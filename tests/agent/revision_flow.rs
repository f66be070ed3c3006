use std::sync::Arc;

use esg_screener::agent::{RunConfig, RunStatus, TraceEntry, VerdictStatus, run};
use esg_screener::error::ServiceError;
use esg_screener::llm::MessageRole;
use esg_screener::tools::default_registry;
use serde_json::json;

use crate::mock_provider::{
    APPROVED, MockProvider, assessment_json, request_text, text, tool_turn,
};

fn config(generator: &Arc<MockProvider>, critic: &Arc<MockProvider>) -> RunConfig {
    RunConfig::new(
        generator.clone(),
        critic.clone(),
        Arc::new(default_registry()),
    )
}

fn verdicts(trace: &[TraceEntry]) -> Vec<(u32, VerdictStatus)> {
    trace
        .iter()
        .filter_map(|entry| match entry {
            TraceEntry::Verdict {
                revision, status, ..
            } => Some((*revision, *status)),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn always_revise_exhausts_the_budget_and_keeps_the_last_candidate() {
    let generator = Arc::new(MockProvider::new(vec![
        Ok(text(&assessment_json(60.0, 50.0, 40.0))),
        Ok(text(&assessment_json(61.0, 51.0, 41.0))),
        Ok(text(&assessment_json(62.0, 52.0, 42.0))),
        Ok(text(&assessment_json(63.0, 53.0, 43.0))),
    ]));
    let critic = Arc::new(MockProvider::repeating(text(
        r#"{"status": "REVISE", "feedback": "Peer comparison is generic."}"#,
    )));

    let result = run("MSFT", &config(&generator, &critic).with_max_revisions(3))
        .await
        .unwrap();

    assert_eq!(result.status, RunStatus::MaxRevisionsReached);
    assert_eq!(result.revisions, 3);
    assert_eq!(critic.calls(), 3);
    assert_eq!(generator.calls(), 4);
    assert_eq!(result.critique_calls, 3);
    assert_eq!(result.generation_iterations, 4);
    assert_eq!(result.total_round_trips(), 7);

    let assessment = result.assessment().unwrap();
    assert_eq!(assessment.environmental_score, 63.0);
    assert_eq!(
        verdicts(&result.trace),
        vec![
            (0, VerdictStatus::Revise),
            (1, VerdictStatus::Revise),
            (2, VerdictStatus::Revise),
        ]
    );
}

#[tokio::test]
async fn revise_then_approve_counts_one_revision() {
    let generator = Arc::new(MockProvider::new(vec![
        Ok(text(&assessment_json(55.0, 55.0, 55.0))),
        Ok(text(&assessment_json(58.0, 57.0, 56.0))),
    ]));
    let critic = Arc::new(MockProvider::new(vec![
        Ok(text(
            r#"{"status": "REVISE", "feedback": "Missing S-pillar rationale."}"#,
        )),
        Ok(text(APPROVED)),
    ]));

    let result = run("JNJ", &config(&generator, &critic).with_max_revisions(3))
        .await
        .unwrap();

    assert_eq!(result.status, RunStatus::Approved);
    assert_eq!(result.revisions, 1);
    assert_eq!(result.assessment().unwrap().social_score, 57.0);
}

#[tokio::test]
async fn retry_is_a_fresh_conversation_with_feedback() {
    let generator = Arc::new(MockProvider::new(vec![
        Ok(tool_turn(&[(
            "c1",
            "get_governance_data",
            json!({"ticker": "JPM"}),
        )])),
        Ok(text(&assessment_json(50.0, 50.0, 50.0))),
        Ok(text(&assessment_json(52.0, 50.0, 50.0))),
    ]));
    let critic = Arc::new(MockProvider::new(vec![
        Ok(text(
            r#"{"status": "REVISE", "feedback": "Cite the board independence figure."}"#,
        )),
        Ok(text(APPROVED)),
    ]));

    let result = run("jpm", &config(&generator, &critic).with_max_revisions(2))
        .await
        .unwrap();
    assert_eq!(result.status, RunStatus::Approved);

    let seen = generator.seen();
    let retry = &seen[2];
    assert_eq!(retry.messages.len(), 2, "retry starts from scratch");
    let task = request_text(retry);
    assert!(task.contains("JPM"));
    assert!(task.contains(
        "Previous assessment was rejected with the following feedback: Cite the board independence figure."
    ));

    // Trace order: tool action, verdict, verdict.
    assert!(result.trace[0].is_tool_action());
    assert_eq!(
        verdicts(&result.trace),
        vec![(0, VerdictStatus::Revise), (1, VerdictStatus::Approved)]
    );
}

#[tokio::test]
async fn critic_sees_candidate_verbatim_with_json_settings() {
    let candidate = assessment_json(70.0, 65.0, 60.0);
    let generator = Arc::new(MockProvider::repeating(text(&candidate)));
    let critic = Arc::new(MockProvider::repeating(text(APPROVED)));

    run("AAPL", &config(&generator, &critic)).await.unwrap();

    let request = &critic.seen()[0];
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert!(request.tool_names.is_empty());
    assert!(request.settings.json_output);
    assert_eq!(request.settings.temperature, 0.0);

    // The fence was stripped by the generation loop before review.
    let inner = candidate
        .trim_start_matches("```json\n")
        .trim_end_matches("\n```");
    assert!(request_text(request).contains(inner));
}

#[tokio::test]
async fn ceiling_on_first_attempt_is_failed() {
    let generator = Arc::new(MockProvider::repeating(tool_turn(&[(
        "c",
        "scan_controversies",
        json!({"ticker": "XOM"}),
    )])));
    let critic = Arc::new(MockProvider::repeating(text(APPROVED)));

    let result = run(
        "XOM",
        &config(&generator, &critic).with_max_iterations(3),
    )
    .await
    .unwrap();

    assert_eq!(result.status, RunStatus::Failed);
    assert_eq!(result.revisions, 0);
    assert_eq!(critic.calls(), 0);
    assert!(!result.is_usable());
    assert_eq!(result.trace.len(), 3);
}

#[tokio::test]
async fn retry_service_failure_keeps_last_good_candidate() {
    let generator = Arc::new(MockProvider::new(vec![
        Ok(text(&assessment_json(44.0, 45.0, 46.0))),
        Err(ServiceError::Status {
            provider: "mock".into(),
            status: 503,
            body: "overloaded".into(),
        }),
    ]));
    let critic = Arc::new(MockProvider::repeating(text(
        r#"{"status": "REVISE", "feedback": "Add controversy severity."}"#,
    )));

    let result = run("AMZN", &config(&generator, &critic).with_max_revisions(2))
        .await
        .unwrap();

    assert_eq!(result.status, RunStatus::FailedRevision);
    assert_eq!(result.revisions, 1);
    assert_eq!(critic.calls(), 1);
    let kept = result.assessment().unwrap();
    assert_eq!(kept.environmental_score, 44.0);
    assert!(matches!(
        result.trace.last(),
        Some(TraceEntry::ServiceFailure { .. })
    ));
}

#[tokio::test]
async fn concurrent_runs_do_not_share_state() {
    let critic = Arc::new(MockProvider::repeating(text(APPROVED)));
    let runs = ["AAPL", "MSFT", "GOOG", "TSLA"].map(|ticker| {
        let generator = Arc::new(MockProvider::repeating(text(&assessment_json(
            ticker.len() as f64 * 10.0,
            50.0,
            50.0,
        ))));
        let cfg = config(&generator, &critic);
        async move { run(ticker, &cfg).await }
    });

    let results = futures_util::future::join_all(runs).await;
    for (result, ticker) in results.into_iter().zip(["AAPL", "MSFT", "GOOG", "TSLA"]) {
        let result = result.unwrap();
        assert_eq!(result.ticker, ticker);
        assert_eq!(result.status, RunStatus::Approved);
        assert_eq!(result.trace.len(), 1);
    }
    assert_eq!(critic.calls(), 4);
}
