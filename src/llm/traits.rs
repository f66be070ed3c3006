use super::types::{ProviderMessage, ProviderResponse};
use crate::error::ServiceError;
use crate::tools::ToolSpec;
use std::future::Future;
use std::pin::Pin;

/// Decoding settings for one completion request.
///
/// The agent and the critic usually differ only here: the critic runs colder
/// and asks for a bare JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f64,
    /// Ask the provider to constrain output to a single JSON object.
    pub json_output: bool,
}

impl ChatSettings {
    pub fn new(model: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
            json_output: false,
        }
    }

    pub fn with_json_output(mut self, json_output: bool) -> Self {
        self.json_output = json_output;
        self
    }
}

pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ProviderResponse, ServiceError>> + Send + 'a>>;

/// A language-completion service.
///
/// Implementations receive the whole conversation on every call and must not
/// keep conversation state of their own.
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "openai").
    fn name(&self) -> &str;

    /// Send the conversation plus the available tool schemas and return the
    /// model's next turn.
    fn complete<'a>(
        &'a self,
        messages: &'a [ProviderMessage],
        tools: &'a [ToolSpec],
        settings: &'a ChatSettings,
    ) -> CompletionFuture<'a>;
}
