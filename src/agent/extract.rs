//! Recover one structured record from free-form model output.
//!
//! Recognition runs in two stages: find a candidate (a ```` ```json ```` fenced
//! object, or failing that the whole text), then decode it. The stages fail
//! differently and callers get to see which one did.

use crate::error::ExtractionError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("valid json fence regex")
});

/// Outcome of [`recognize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Success(Value),
    /// Nothing that looks like a structured record.
    NoMatch,
    /// A candidate was found but did not decode to a JSON object.
    MalformedValue(String),
}

impl Extraction {
    pub fn into_result(self) -> Result<Value, ExtractionError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::NoMatch => Err(ExtractionError::NoMatch),
            Self::MalformedValue(reason) => Err(ExtractionError::MalformedValue(reason)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Contents of the first ```` ```json ```` fenced object, if any.
fn fenced_object(text: &str) -> Option<&str> {
    JSON_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip wrapper prose around a final answer.
///
/// Returns the fenced object when present, otherwise the text unchanged.
pub fn strip_fence(text: &str) -> &str {
    fenced_object(text).unwrap_or(text)
}

pub fn recognize(text: &str) -> Extraction {
    let candidate = match fenced_object(text) {
        Some(inner) => inner,
        None => {
            let trimmed = text.trim();
            if !trimmed.starts_with('{') {
                return Extraction::NoMatch;
            }
            trimmed
        }
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(value @ Value::Object(_)) => Extraction::Success(value),
        Ok(other) => Extraction::MalformedValue(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        )),
        Err(e) => Extraction::MalformedValue(e.to_string()),
    }
}

/// [`recognize`] as a `Result`.
pub fn extract(text: &str) -> Result<Value, ExtractionError> {
    recognize(text).into_result()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
