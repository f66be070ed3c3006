use super::types::{
    ChatRequest, ChatResponse, Message, OpenAiTool, OpenAiToolCall, OpenAiToolCallFunction,
    OpenAiToolDefinition, ResponseFormat,
};
use crate::error::ServiceError;
use crate::llm::traits::ChatSettings;
use crate::llm::types::{ContentBlock, MessageRole, ProviderMessage, ProviderResponse, StopReason};
use crate::tools::ToolSpec;
use serde_json::Value;
use tracing::debug;

pub(in crate::llm) fn build_text_message(role: &'static str, content: String) -> Message {
    Message {
        role,
        content: Some(content),
        tool_call_id: None,
        tool_calls: None,
    }
}

/// Arguments as sent on the wire. Undecodable arguments were kept as the raw
/// string and go back unchanged.
fn wire_arguments(input: &Value) -> String {
    match input {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    }
}

/// Map one conversation message onto zero or more chat-completions messages.
///
/// Text and tool results go out verbatim. Tool results become one `tool`
/// message each, keyed by the call id.
pub(in crate::llm) fn map_provider_message(provider_message: &ProviderMessage) -> Vec<Message> {
    let mut text_parts = Vec::new();
    let mut assistant_tool_calls = Vec::new();
    let mut tool_messages = Vec::new();

    for block in &provider_message.content {
        match block {
            ContentBlock::Text { text } => {
                text_parts.push(text.clone());
            }
            ContentBlock::ToolUse { id, name, input } => {
                assistant_tool_calls.push(OpenAiToolCall {
                    id: id.clone(),
                    r#type: "function".to_string(),
                    function: OpenAiToolCallFunction {
                        name: name.clone(),
                        arguments: wire_arguments(input),
                    },
                });
            }
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error: _,
            } => {
                tool_messages.push(Message {
                    role: "tool",
                    content: Some(content.clone()),
                    tool_call_id: Some(tool_use_id.clone()),
                    tool_calls: None,
                });
            }
        }
    }

    let mut messages = Vec::new();
    let text_content = if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join("\n"))
    };

    match provider_message.role {
        MessageRole::Assistant => {
            if text_content.is_some() || !assistant_tool_calls.is_empty() {
                messages.push(Message {
                    role: "assistant",
                    content: text_content,
                    tool_call_id: None,
                    tool_calls: if assistant_tool_calls.is_empty() {
                        None
                    } else {
                        Some(assistant_tool_calls)
                    },
                });
            }
        }
        MessageRole::User | MessageRole::Tool => {
            if let Some(content) = text_content {
                messages.push(build_text_message("user", content));
            }
        }
        MessageRole::System => {
            if let Some(content) = text_content {
                messages.push(build_text_message("system", content));
            }
        }
    }

    messages.extend(tool_messages);
    messages
}

pub(in crate::llm) fn build_openai_tools(tools: &[ToolSpec]) -> Option<Vec<OpenAiTool>> {
    if tools.is_empty() {
        return None;
    }
    Some(
        tools
            .iter()
            .map(|tool| OpenAiTool {
                r#type: "function",
                function: OpenAiToolDefinition {
                    name: tool.name.clone(),
                    description: tool.description.clone(),
                    parameters: tool.parameters.clone(),
                },
            })
            .collect(),
    )
}

pub(in crate::llm) fn build_request(
    messages: &[ProviderMessage],
    tools: &[ToolSpec],
    settings: &ChatSettings,
) -> ChatRequest {
    let tools = build_openai_tools(tools);
    ChatRequest {
        model: settings.model.clone(),
        messages: messages.iter().flat_map(map_provider_message).collect(),
        temperature: settings.temperature,
        tool_choice: tools.as_ref().map(|_| "auto"),
        tools,
        response_format: settings.json_output.then_some(ResponseFormat {
            r#type: "json_object",
        }),
    }
}

pub(in crate::llm) fn map_finish_reason(finish_reason: Option<&str>) -> StopReason {
    match finish_reason {
        Some("stop") => StopReason::EndTurn,
        Some("tool_calls") => StopReason::ToolUse,
        Some("length") => StopReason::MaxTokens,
        Some(_) | None => StopReason::Error,
    }
}

/// Decode tool-call argument strings.
///
/// Arguments that are not valid JSON are kept as a raw string value so the
/// tool registry can reject them as invalid arguments for that one call.
pub(in crate::llm) fn parse_tool_calls(tool_calls: Option<Vec<OpenAiToolCall>>) -> Vec<ContentBlock> {
    tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|tool_call| {
            // Some models send an empty string for zero-argument calls.
            let raw = tool_call.function.arguments.trim();
            let input = if raw.is_empty() {
                Value::Object(serde_json::Map::new())
            } else {
                serde_json::from_str(raw).unwrap_or_else(|e| {
                    debug!(
                        tool = %tool_call.function.name,
                        error = %e,
                        "provider.tool_arguments_undecodable"
                    );
                    Value::String(raw.to_string())
                })
            };
            ContentBlock::ToolUse {
                id: tool_call.id,
                name: tool_call.function.name,
                input,
            }
        })
        .collect()
}

pub(in crate::llm) fn into_provider_response(
    chat_response: ChatResponse,
    provider_name: &str,
) -> Result<ProviderResponse, ServiceError> {
    let ChatResponse {
        choices,
        usage,
        model,
    } = chat_response;
    let choice = choices
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::InvalidResponse {
            provider: provider_name.to_string(),
            message: "response contained no choices".to_string(),
        })?;

    let text = choice.message.content.unwrap_or_default();
    let mut content_blocks = parse_tool_calls(choice.message.tool_calls);
    if !text.is_empty() {
        content_blocks.insert(0, ContentBlock::Text { text: text.clone() });
    }

    let mut response = ProviderResponse::text_only(text);
    response.content_blocks = content_blocks;
    response.stop_reason = Some(map_finish_reason(choice.finish_reason.as_deref()));
    if let Some(usage) = usage {
        response = response.with_usage(usage.prompt_tokens, usage.completion_tokens);
    }
    if let Some(model) = model {
        response = response.with_model(model);
    }
    Ok(response)
}
