mod compat;
mod types;

use crate::error::ServiceError;
use crate::llm::http_client::build_provider_client_with_timeout;
use crate::llm::scrub::api_error;
use crate::llm::traits::{ChatSettings, CompletionFuture, Provider};
use crate::llm::types::{ProviderMessage, ProviderResponse};
use crate::tools::ToolSpec;
use reqwest::Client;
use tracing::debug;

const PROVIDER_NAME: &str = "openai";

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiCompatibleProvider {
    base_url: String,
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    client: Client,
}

impl OpenAiCompatibleProvider {
    pub fn new(base_url: &str, api_key: Option<&str>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cached_auth_header: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| format!("Bearer {key}")),
            client: build_provider_client_with_timeout(timeout_secs),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn send(
        &self,
        messages: &[ProviderMessage],
        tools: &[ToolSpec],
        settings: &ChatSettings,
    ) -> Result<ProviderResponse, ServiceError> {
        let auth_header =
            self.cached_auth_header
                .as_ref()
                .ok_or_else(|| ServiceError::MissingApiKey {
                    provider: PROVIDER_NAME.to_string(),
                })?;

        let request = compat::build_request(messages, tools, settings);
        debug!(
            model = %settings.model,
            messages = request.messages.len(),
            tools = tools.len(),
            json_output = settings.json_output,
            "provider.request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", auth_header)
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Request {
                provider: PROVIDER_NAME.to_string(),
                message: crate::llm::sanitize_api_error(&e.to_string()),
            })?;

        if !response.status().is_success() {
            return Err(api_error(PROVIDER_NAME, response).await);
        }

        let chat_response: types::ChatResponse =
            response
                .json()
                .await
                .map_err(|e| ServiceError::InvalidResponse {
                    provider: PROVIDER_NAME.to_string(),
                    message: format!("response JSON decode failed: {e}"),
                })?;

        compat::into_provider_response(chat_response, PROVIDER_NAME)
    }
}

impl Provider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn complete<'a>(
        &'a self,
        messages: &'a [ProviderMessage],
        tools: &'a [ToolSpec],
        settings: &'a ChatSettings,
    ) -> CompletionFuture<'a> {
        Box::pin(self.send(messages, tools, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::StopReason;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn creates_with_key() {
        let p = OpenAiCompatibleProvider::new("https://api.openai.com/v1/", Some("sk-proj-abc"), 30);
        assert_eq!(p.cached_auth_header.as_deref(), Some("Bearer sk-proj-abc"));
        assert_eq!(p.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let p = OpenAiCompatibleProvider::new("https://api.openai.com/v1", Some("  "), 30);
        assert!(p.cached_auth_header.is_none());
    }

    #[tokio::test]
    async fn complete_fails_without_key() {
        let p = OpenAiCompatibleProvider::new("http://127.0.0.1:1", None, 5);
        let err = p
            .complete(
                &[ProviderMessage::user("hello")],
                &[],
                &ChatSettings::new("gpt-4o", 0.2),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingApiKey { .. }));
    }

    #[tokio::test]
    async fn complete_parses_tool_calls_from_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "gpt-4o-2024-08-06",
                "choices": [{
                    "message": {
                        "content": null,
                        "tool_calls": [{
                            "id": "call_1",
                            "type": "function",
                            "function": {
                                "name": "get_environmental_metrics",
                                "arguments": "{\"ticker\":\"AAPL\"}"
                            }
                        }]
                    },
                    "finish_reason": "tool_calls"
                }],
                "usage": {"prompt_tokens": 120, "completion_tokens": 15}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let p = OpenAiCompatibleProvider::new(&format!("{}/v1", server.uri()), Some("test-key"), 5);
        let response = p
            .complete(
                &[ProviderMessage::user("assess AAPL")],
                &[],
                &ChatSettings::new("gpt-4o", 0.2),
            )
            .await
            .unwrap();

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "get_environmental_metrics");
        assert_eq!(calls[0].arguments, json!({"ticker": "AAPL"}));
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));
        assert_eq!(response.total_tokens(), Some(135));
        assert_eq!(response.model.as_deref(), Some("gpt-4o-2024-08-06"));
    }

    #[tokio::test]
    async fn non_success_status_is_sanitized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string("Incorrect API key provided: sk-proj-leaked123"),
            )
            .mount(&server)
            .await;

        let p = OpenAiCompatibleProvider::new(&server.uri(), Some("bad"), 5);
        let err = p
            .complete(
                &[ProviderMessage::user("hi")],
                &[],
                &ChatSettings::new("gpt-4o", 0.0),
            )
            .await
            .unwrap_err();

        match err {
            ServiceError::Status { status, body, .. } => {
                assert_eq!(status, 401);
                assert!(!body.contains("leaked123"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let p = OpenAiCompatibleProvider::new(&server.uri(), Some("key"), 5);
        let err = p
            .complete(
                &[ProviderMessage::user("hi")],
                &[],
                &ChatSettings::new("gpt-4o", 0.0),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn outgoing_text_reaches_server_verbatim() {
        let server = MockServer::start().await;
        let rationale = "Transition risk-adjusted; high-risk-exposure to stranded assets";
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains(rationale))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": {"content": "{\"status\": \"APPROVED\"}"},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let p = OpenAiCompatibleProvider::new(&server.uri(), Some("test-key"), 5);
        let response = p
            .complete(
                &[ProviderMessage::system(format!("Review: {rationale}"))],
                &[],
                &ChatSettings::new("gpt-4o", 0.0).with_json_output(true),
            )
            .await
            .unwrap();
        assert!(response.text.contains("APPROVED"));
    }

    #[tokio::test]
    async fn malformed_tool_arguments_do_not_fail_the_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": {
                        "content": null,
                        "tool_calls": [{
                            "id": "call_1",
                            "type": "function",
                            "function": {
                                "name": "get_governance_data",
                                "arguments": "{\"ticker\": \"XOM\""
                            }
                        }]
                    },
                    "finish_reason": "tool_calls"
                }]
            })))
            .mount(&server)
            .await;

        let p = OpenAiCompatibleProvider::new(&server.uri(), Some("test-key"), 5);
        let response = p
            .complete(
                &[ProviderMessage::user("assess XOM")],
                &[],
                &ChatSettings::new("gpt-4o", 0.2),
            )
            .await
            .unwrap();

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].arguments, json!("{\"ticker\": \"XOM\""));
    }
}
