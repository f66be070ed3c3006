use super::types::{ToolOutput, ToolSpec};
use crate::error::ToolError;
use serde_json::Value;

/// A named capability the model may request mid-conversation.
///
/// Handlers are synchronous lookups from the loop's point of view. They may
/// fail; the registry turns failures into text the model can read.
pub trait Tool: Send + Sync {
    /// Tool name (used in LLM function calling). Unique within a registry.
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// JSON schema for parameters
    fn parameters_schema(&self) -> Value;

    fn invoke(&self, args: &Value) -> Result<ToolOutput, ToolError>;

    /// Get the full spec for LLM registration
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}
