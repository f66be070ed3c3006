use super::extract;
use crate::error::ExtractionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Approved,
    Revise,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "APPROVED"),
            Self::Revise => write!(f, "REVISE"),
        }
    }
}

/// The critic's decision on one candidate assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub feedback: String,
}

impl Verdict {
    pub fn revise(feedback: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Revise,
            feedback: feedback.into(),
        }
    }

    /// Decode a critic reply.
    ///
    /// A missing or unrecognised `status` counts as REVISE. Only the exact
    /// word APPROVED (any case) approves.
    pub fn parse(text: &str) -> Result<Self, ExtractionError> {
        let value = extract::extract(text)?;
        let status = match value.get("status").and_then(Value::as_str) {
            Some(s) if s.trim().eq_ignore_ascii_case("APPROVED") => VerdictStatus::Approved,
            _ => VerdictStatus::Revise,
        };
        let feedback = match value.get("feedback") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Ok(Self { status, feedback })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_approval() {
        let verdict = Verdict::parse(r#"{"status": "APPROVED", "feedback": ""}"#).unwrap();
        assert_eq!(verdict.status, VerdictStatus::Approved);
        assert!(verdict.feedback.is_empty());
    }

    #[test]
    fn parses_revise_with_feedback() {
        let verdict = Verdict::parse(
            r#"{"status": "REVISE", "feedback": "Governance rationale ignores CEO/Chair duality."}"#,
        )
        .unwrap();
        assert_eq!(verdict.status, VerdictStatus::Revise);
        assert!(verdict.feedback.contains("CEO/Chair"));
    }

    #[test]
    fn unknown_or_missing_status_means_revise() {
        assert_eq!(
            Verdict::parse(r#"{"status": "MAYBE"}"#).unwrap().status,
            VerdictStatus::Revise
        );
        assert_eq!(
            Verdict::parse(r#"{"feedback": "fix it"}"#).unwrap().status,
            VerdictStatus::Revise
        );
    }

    #[test]
    fn non_json_reply_is_an_error() {
        assert!(matches!(
            Verdict::parse("Looks great to me!"),
            Err(ExtractionError::NoMatch)
        ));
    }

    #[test]
    fn status_serializes_in_upper_case() {
        assert_eq!(
            serde_json::to_string(&VerdictStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        assert_eq!(VerdictStatus::Revise.to_string(), "REVISE");
    }
}
