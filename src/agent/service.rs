use crate::error::ServiceError;
use crate::llm::{ChatSettings, Provider, ProviderMessage, ProviderResponse};
use crate::tools::ToolSpec;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Deadline and cancellation applied to every completion-service call.
#[derive(Debug, Clone, Default)]
pub struct CallGuard {
    pub timeout: Option<Duration>,
    pub cancel: CancellationToken,
}

impl CallGuard {
    pub fn new(timeout: Option<Duration>, cancel: CancellationToken) -> Self {
        Self { timeout, cancel }
    }

    /// One completion call raced against the deadline and the token.
    ///
    /// Both surface as [`ServiceError`] so callers follow the ordinary
    /// service-failure path.
    pub async fn complete(
        &self,
        provider: &dyn Provider,
        messages: &[ProviderMessage],
        tools: &[ToolSpec],
        settings: &ChatSettings,
    ) -> Result<ProviderResponse, ServiceError> {
        if self.cancel.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let call = async {
            match self.timeout {
                Some(limit) => {
                    match tokio::time::timeout(limit, provider.complete(messages, tools, settings))
                        .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(ServiceError::Timeout {
                            after_secs: limit.as_secs(),
                        }),
                    }
                }
                None => provider.complete(messages, tools, settings).await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ServiceError::Cancelled),
            result = call => result,
        }
    }
}
