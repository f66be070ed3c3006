use std::sync::Arc;

use esg_screener::agent::{
    CEILING_MESSAGE, CallGuard, LoopOutcome, ToolLoop, ToolLoopResult, ToolLoopRunParams,
    TraceEntry,
};
use esg_screener::error::ToolError;
use esg_screener::llm::{ChatSettings, ContentBlock, MessageRole, ProviderResponse};
use esg_screener::tools::{Tool, ToolOutput, ToolRegistry, default_registry};
use serde_json::{Value, json};

use crate::mock_provider::{MockProvider, text, tool_turn};

async fn drive(provider: &MockProvider, registry: ToolRegistry, ceiling: u32) -> ToolLoopResult {
    let settings = ChatSettings::new("gpt-4o", 0.2);
    let guard = CallGuard::default();
    ToolLoop::new(Arc::new(registry), ceiling)
        .run(ToolLoopRunParams {
            provider,
            system_prompt: "You are an ESG analyst.",
            task_message: "Assess TSLA.",
            settings: &settings,
            guard: &guard,
        })
        .await
}

fn actions(result: &ToolLoopResult) -> Vec<String> {
    result
        .trace
        .iter()
        .filter_map(|entry| match entry {
            TraceEntry::ToolAction { action, .. } => Some(action.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn three_tool_turns_then_answer() {
    let final_answer = "Assessment complete.\n```json\n{\"ticker\": \"TSLA\", \"environmental_score\": 71}\n```";
    let provider = MockProvider::new(vec![
        Ok(tool_turn(&[(
            "c1",
            "get_sasb_materiality",
            json!({"industry": "Automobiles"}),
        )])),
        Ok(tool_turn(&[(
            "c2",
            "get_environmental_metrics",
            json!({"ticker": "TSLA"}),
        )])),
        Ok(tool_turn(&[("c3", "scan_controversies", json!({"ticker": "TSLA"}))])),
        Ok(text(final_answer)),
    ]);

    let result = drive(&provider, default_registry(), 15).await;

    assert_eq!(result.iterations, 4);
    assert_eq!(provider.calls(), 4);
    assert_eq!(
        actions(&result),
        vec![
            r#"get_sasb_materiality({"industry":"Automobiles"})"#,
            r#"get_environmental_metrics({"ticker":"TSLA"})"#,
            r#"scan_controversies({"ticker":"TSLA"})"#,
        ]
    );
    assert_eq!(
        result.outcome,
        LoopOutcome::Completed(r#"{"ticker": "TSLA", "environmental_score": 71}"#.into())
    );
}

#[tokio::test]
async fn endless_tool_requests_hit_the_ceiling() {
    let provider = MockProvider::repeating(tool_turn(&[(
        "c",
        "get_governance_data",
        json!({"ticker": "TSLA"}),
    )]));

    let result = drive(&provider, default_registry(), 4).await;

    assert_eq!(result.outcome, LoopOutcome::CeilingReached);
    assert_eq!(result.iterations, 4);
    assert_eq!(result.answer(), CEILING_MESSAGE);
    assert_eq!(provider.calls(), 4);
    assert_eq!(result.trace.len(), 4);
}

#[tokio::test]
async fn tools_in_one_turn_run_in_request_order() {
    let provider = MockProvider::new(vec![
        Ok(tool_turn(&[
            ("a", "get_peer_esg_scores", json!({"ticker": "TSLA"})),
            ("b", "unknown_tool", json!({})),
            ("c", "get_governance_data", json!({"ticker": "TSLA"})),
        ])),
        Ok(text("{}")),
    ]);

    let result = drive(&provider, default_registry(), 15).await;
    let actions = actions(&result);
    assert_eq!(actions.len(), 3);
    assert!(actions[0].starts_with("get_peer_esg_scores"));
    assert!(actions[1].starts_with("unknown_tool"));
    assert!(actions[2].starts_with("get_governance_data"));

    // Assistant turn, then one tool result per call, in the same order.
    let second = &provider.seen()[1].messages;
    let ids: Vec<&str> = second
        .iter()
        .filter(|m| m.role == MessageRole::Tool)
        .flat_map(|m| m.content.iter())
        .filter_map(|block| match block {
            ContentBlock::ToolResult { tool_use_id, .. } => Some(tool_use_id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn every_request_carries_the_tool_schemas() {
    let provider = MockProvider::new(vec![
        Ok(tool_turn(&[("c1", "get_governance_data", json!({"ticker": "TSLA"}))])),
        Ok(text("{}")),
    ]);
    drive(&provider, default_registry(), 15).await;

    for request in provider.seen() {
        assert_eq!(
            request.tool_names,
            vec![
                "get_environmental_metrics",
                "get_governance_data",
                "get_peer_esg_scores",
                "get_sasb_materiality",
                "scan_controversies",
            ]
        );
    }
}

struct PanickingTool;

impl Tool for PanickingTool {
    fn name(&self) -> &str {
        "flaky_feed"
    }

    fn description(&self) -> &str {
        "Always panics."
    }

    fn parameters_schema(&self) -> Value {
        json!({"type": "object"})
    }

    fn invoke(&self, _args: &Value) -> Result<ToolOutput, ToolError> {
        panic!("feed offline")
    }
}

#[tokio::test]
async fn panicking_handler_is_fed_back_to_the_model() {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(PanickingTool));
    let provider = MockProvider::new(vec![
        Ok(tool_turn(&[("c1", "flaky_feed", json!({}))])),
        Ok(text(r#"{"status": "partial"}"#)),
    ]);

    let result = drive(&provider, registry, 15).await;

    assert!(!result.is_failure());
    let TraceEntry::ToolAction { result_preview, .. } = &result.trace[0] else {
        panic!("expected a tool action");
    };
    assert!(result_preview.starts_with("Tool 'flaky_feed' failed:"));
    assert!(result_preview.contains("feed offline"));
}

#[tokio::test]
async fn answer_without_fence_is_returned_whole() {
    let provider = MockProvider::new(vec![Ok(ProviderResponse::text_only(
        "I was unable to complete the assessment.",
    ))]);
    let result = drive(&provider, default_registry(), 15).await;
    assert_eq!(result.answer(), "I was unable to complete the assessment.");
    assert_eq!(result.iterations, 1);
}

#[tokio::test]
async fn undecodable_arguments_are_rejected_inline() {
    let provider = MockProvider::new(vec![
        Ok(tool_turn(&[
            ("c1", "get_governance_data", json!("{\"ticker\": \"XOM\"")),
            ("c2", "get_governance_data", json!({"ticker": "XOM"})),
        ])),
        Ok(text("```json\n{\"ticker\": \"XOM\", \"governance_score\": 62}\n```")),
    ]);

    let result = drive(&provider, default_registry(), 15).await;

    assert!(!result.is_failure());
    assert_eq!(result.iterations, 2);
    assert_eq!(
        result.answer(),
        r#"{"ticker": "XOM", "governance_score": 62}"#
    );

    let second = &provider.seen()[1];
    let rejected = second.messages.iter().find_map(|m| {
        m.content.iter().find_map(|block| match block {
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
            } if tool_use_id == "c1" => Some((content.clone(), *is_error)),
            _ => None,
        })
    });
    let (content, is_error) = rejected.expect("tool result for c1");
    assert!(is_error);
    assert!(content.starts_with("Tool 'get_governance_data' rejected its arguments:"));

    let TraceEntry::ToolAction { result_preview, .. } = &result.trace[1] else {
        panic!("expected a tool action");
    };
    assert!(!result_preview.contains("rejected"));
}
