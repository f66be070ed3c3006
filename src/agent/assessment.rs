use super::extract;
use crate::error::ExtractionError;
use crate::scoring::PillarScores;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured ESG assessment recovered from a final answer.
///
/// The three pillar scores are required. Everything else defaults when the
/// model leaves it out; text fields the model sent as objects or numbers are
/// kept as their JSON rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ticker: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub sasb_material_topics: Vec<String>,

    pub environmental_score: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub environmental_rationale: String,
    pub social_score: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub social_rationale: String,
    pub governance_score: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub governance_rationale: String,

    /// Model-reported composite. Informational only; the weighted composite
    /// is computed from materiality weights.
    #[serde(default)]
    pub composite_score: Option<f64>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub controversies_summary: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub peer_comparison: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub key_risks: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub recommendation: String,
}

impl Assessment {
    /// Extract, decode, and range-check an assessment from model output.
    pub fn from_model_output(text: &str) -> Result<Self, ExtractionError> {
        let value = extract::extract(text)?;
        let assessment: Self = serde_json::from_value(value)
            .map_err(|e| ExtractionError::MalformedValue(e.to_string()))?;
        assessment.validate()?;
        Ok(assessment)
    }

    pub fn pillar_scores(&self) -> PillarScores {
        PillarScores::new(
            self.environmental_score,
            self.social_score,
            self.governance_score,
        )
    }

    fn validate(&self) -> Result<(), ExtractionError> {
        let mut fields = vec![
            ("environmental_score", self.environmental_score),
            ("social_score", self.social_score),
            ("governance_score", self.governance_score),
        ];
        if let Some(composite) = self.composite_score {
            fields.push(("composite_score", composite));
        }

        for (field, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                return Err(ExtractionError::InvalidField {
                    field: field.to_string(),
                    reason: format!("{value} is outside 0-100"),
                });
            }
        }
        Ok(())
    }
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(stringify(Value::deserialize(deserializer)?))
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(stringify).collect(),
        Value::Null => Vec::new(),
        single => vec![stringify(single)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"Final assessment:
```json
{
  "company": "Apple Inc.",
  "ticker": "AAPL",
  "industry": "Technology Hardware",
  "sasb_material_topics": ["Supply Chain Management", "Energy Management"],
  "environmental_score": 82,
  "environmental_rationale": "Carbon neutral corporate operations since 2020.",
  "social_score": 68,
  "social_rationale": "Supplier labor audits flagged issues.",
  "governance_score": 75.5,
  "governance_rationale": "Separated CEO/Chair.",
  "composite_score": 75,
  "controversies_summary": "Supplier labor conditions (medium).",
  "peer_comparison": {"MSFT": 79},
  "key_risks": ["Supply chain labor"],
  "recommendation": "Strong ESG"
}
```"#;

    #[test]
    fn decodes_fenced_answer() {
        let a = Assessment::from_model_output(FULL).unwrap();
        assert_eq!(a.ticker, "AAPL");
        assert_eq!(a.governance_score, 75.5);
        assert_eq!(a.composite_score, Some(75.0));
        assert_eq!(a.key_risks, vec!["Supply chain labor"]);
    }

    #[test]
    fn non_string_text_fields_are_rendered() {
        let a = Assessment::from_model_output(FULL).unwrap();
        assert_eq!(a.peer_comparison, r#"{"MSFT":79}"#);
    }

    #[test]
    fn only_pillar_scores_are_required() {
        let a = Assessment::from_model_output(
            r#"{"environmental_score": 10, "social_score": 20, "governance_score": 30}"#,
        )
        .unwrap();
        assert!(a.company.is_empty());
        assert!(a.sasb_material_topics.is_empty());
        assert_eq!(a.composite_score, None);
        assert_eq!(a.pillar_scores(), PillarScores::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn missing_pillar_is_malformed() {
        let err = Assessment::from_model_output(r#"{"environmental_score": 10}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedValue(msg) if msg.contains("social_score")));
    }

    #[test]
    fn out_of_range_score_is_invalid_field() {
        let err = Assessment::from_model_output(
            r#"{"environmental_score": 101, "social_score": 20, "governance_score": 30}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ExtractionError::InvalidField {
                field: "environmental_score".into(),
                reason: "101 is outside 0-100".into(),
            }
        );
    }

    #[test]
    fn sentinel_text_is_no_match() {
        let err = Assessment::from_model_output(
            "Max iterations reached without generating a final JSON assessment.",
        )
        .unwrap_err();
        assert_eq!(err, ExtractionError::NoMatch);
    }

    #[test]
    fn single_string_list_is_wrapped() {
        let a = Assessment::from_model_output(
            r#"{"environmental_score": 1, "social_score": 2, "governance_score": 3, "key_risks": "Flooding"}"#,
        )
        .unwrap();
        assert_eq!(a.key_risks, vec!["Flooding"]);
    }
}
