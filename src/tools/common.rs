use crate::error::ToolError;
use serde_json::{Value, json};

/// Schema for a tool that takes one required string argument.
pub(crate) fn single_string_schema(field: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            field: {
                "type": "string",
                "description": description
            }
        },
        "required": [field]
    })
}

/// Extract a non-empty string argument, trimmed.
pub(crate) fn required_str<'a>(
    tool: &str,
    args: &'a Value,
    field: &str,
) -> Result<&'a str, ToolError> {
    args.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ToolError::InvalidArguments {
            name: tool.to_string(),
            message: format!("missing required string argument '{field}'"),
        })
}

/// Ticker argument, normalised to upper case.
pub(crate) fn ticker_arg(tool: &str, args: &Value) -> Result<String, ToolError> {
    required_str(tool, args, "ticker").map(str::to_ascii_uppercase)
}
