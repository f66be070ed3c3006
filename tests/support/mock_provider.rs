#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use esg_screener::error::ServiceError;
use esg_screener::llm::{
    ChatSettings, CompletionFuture, Provider, ProviderMessage, ProviderResponse, ToolCallRequest,
};
use esg_screener::tools::ToolSpec;
use serde_json::Value;

/// One recorded `complete` call.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub messages: Vec<ProviderMessage>,
    pub tool_names: Vec<String>,
    pub settings: ChatSettings,
}

/// Replays canned replies in order, then repeats `fallback` forever.
pub struct MockProvider {
    replies: Mutex<VecDeque<Result<ProviderResponse, ServiceError>>>,
    fallback: Mutex<Option<ProviderResponse>>,
    seen: Mutex<Vec<SeenRequest>>,
}

impl MockProvider {
    pub fn new(replies: Vec<Result<ProviderResponse, ServiceError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            fallback: Mutex::new(None),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn repeating(reply: ProviderResponse) -> Self {
        let mock = Self::new(Vec::new());
        *mock.fallback.lock().unwrap_or_else(PoisonError::into_inner) = Some(reply);
        mock
    }

    pub fn with_fallback(self, reply: ProviderResponse) -> Self {
        *self.fallback.lock().unwrap_or_else(PoisonError::into_inner) = Some(reply);
        self
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn complete<'a>(
        &'a self,
        messages: &'a [ProviderMessage],
        tools: &'a [ToolSpec],
        settings: &'a ChatSettings,
    ) -> CompletionFuture<'a> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SeenRequest {
                messages: messages.to_vec(),
                tool_names: tools.iter().map(|t| t.name.clone()).collect(),
                settings: settings.clone(),
            });

        let next = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let reply = next.unwrap_or_else(|| {
            self.fallback
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
                .ok_or_else(|| ServiceError::Request {
                    provider: "mock".into(),
                    message: "script exhausted".into(),
                })
        });
        Box::pin(async move { reply })
    }
}

pub fn text(body: &str) -> ProviderResponse {
    ProviderResponse::text_only(body)
}

pub fn tool_turn(calls: &[(&str, &str, Value)]) -> ProviderResponse {
    ProviderResponse::with_tool_calls(
        calls
            .iter()
            .map(|(id, name, args)| ToolCallRequest {
                id: (*id).to_string(),
                name: (*name).to_string(),
                arguments: args.clone(),
            })
            .collect(),
    )
}

/// Text of every message in a request, joined.
pub fn request_text(request: &SeenRequest) -> String {
    request
        .messages
        .iter()
        .map(ProviderMessage::text)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn assessment_json(e: f64, s: f64, g: f64) -> String {
    format!(
        "```json\n{{\"environmental_score\": {e}, \"social_score\": {s}, \"governance_score\": {g}, \"recommendation\": \"Adequate ESG\"}}\n```"
    )
}

pub const APPROVED: &str = r#"{"status": "APPROVED", "feedback": ""}"#;
