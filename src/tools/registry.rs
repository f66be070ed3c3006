use super::traits::Tool;
use super::types::ToolSpec;
use crate::error::ToolError;
use serde_json::Value;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Name-keyed set of tools. Built once, then shared read-only behind an `Arc`.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let tool: Arc<dyn Tool> = Arc::from(tool);
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Look up a tool by name.
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Run the named tool and render its output as conversation text.
    ///
    /// Arguments must be a JSON object. A panicking handler is reported as
    /// [`ToolError::Execution`].
    pub fn invoke(&self, name: &str, args: &Value) -> Result<String, ToolError> {
        let tool = self.resolve(name).ok_or_else(|| ToolError::NotFound {
            name: name.to_string(),
        })?;
        if !args.is_object() {
            return Err(ToolError::InvalidArguments {
                name: name.to_string(),
                message: format!("arguments must be a JSON object, got {args}"),
            });
        }

        let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| tool.invoke(args)));
        match outcome {
            Ok(result) => result.map(super::ToolOutput::into_text),
            Err(payload) => Err(ToolError::Execution {
                name: name.to_string(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }

    /// Return sorted list of registered tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Specs for all registered tools, sorted by name so requests are stable.
    pub fn specs(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.values().map(|tool| tool.spec()).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
