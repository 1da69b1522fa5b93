//! Request and response records for the scoring operation.

use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;
use crate::scoring::{KeywordDetail, ScoreBreakdown};

pub(crate) fn default_wpm() -> f64 {
    120.0
}

/// A scoring request. A missing `text` scores as the empty transcript and a
/// missing `wpm` defaults to 120 (the target pace band).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub text: String,
    /// Speaking pace in words per minute; `None` when the request omitted
    /// it, so callers can apply their own configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wpm: Option<f64>,
}

impl ScoreRequest {
    /// The request's pace, or the wire default of 120 wpm.
    pub fn wpm_or_default(&self) -> f64 {
        self.wpm.unwrap_or_else(default_wpm)
    }
}

/// Parse a JSON request body, reporting malformed input explicitly instead
/// of failing uncontrolled downstream.
pub fn parse_request(body: &str) -> Result<ScoreRequest, ScoreError> {
    serde_json::from_str(body).map_err(|err| ScoreError::InvalidRequest(err.to_string()))
}

/// The response record: per-dimension sub-scores under their wire names
/// (`wpm` carries the pace sub-score, `vocab` the vocabulary sub-score),
/// plus the formatted and numeric totals.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    #[serde(rename = "Total Score")]
    pub total_score: String,
    pub salutation: u32,
    pub keywords: u32,
    pub keywords_detail: KeywordDetail,
    pub flow: u32,
    pub wpm: u32,
    pub grammar: u32,
    pub vocab: u32,
    pub filler: u32,
    pub sentiment: u32,
    pub overall: u32,
}

impl From<&ScoreBreakdown> for ScoreReport {
    fn from(breakdown: &ScoreBreakdown) -> Self {
        Self {
            total_score: format!("{}/100", breakdown.overall),
            salutation: breakdown.salutation,
            keywords: breakdown.keywords,
            keywords_detail: breakdown.keyword_detail.clone(),
            flow: breakdown.flow,
            wpm: breakdown.pace,
            grammar: breakdown.grammar,
            vocab: breakdown.vocabulary,
            filler: breakdown.filler,
            sentiment: breakdown.sentiment,
            overall: breakdown.overall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let request = parse_request("{}").unwrap();
        assert_eq!(request.text, "");
        assert_eq!(request.wpm, None);
        assert_eq!(request.wpm_or_default(), 120.0);

        let request = parse_request(r#"{"text": "hello", "wpm": 95}"#).unwrap();
        assert_eq!(request.text, "hello");
        assert_eq!(request.wpm, Some(95.0));
        assert_eq!(request.wpm_or_default(), 95.0);
    }

    #[test]
    fn malformed_body_is_an_explicit_error() {
        let err = parse_request("{not json").unwrap_err();
        assert!(matches!(err, ScoreError::InvalidRequest(_)));
    }

    #[test]
    fn report_serializes_the_wire_field_names() {
        let breakdown = ScoreBreakdown {
            salutation: 4,
            keywords: 8,
            keyword_detail: KeywordDetail::default(),
            flow: 5,
            pace: 10,
            grammar: 2,
            grammar_quality: 1.0,
            vocabulary: 10,
            vocabulary_ratio: 1.0,
            filler: 15,
            filler_rate: 0.0,
            filler_findings: Default::default(),
            sentiment: 3,
            sentiment_positivity: 0.0,
            overall: 57,
            degraded: vec![],
        };
        let report = ScoreReport::from(&breakdown);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["Total Score"], "57/100");
        assert_eq!(value["wpm"], 10);
        assert_eq!(value["vocab"], 10);
        assert_eq!(value["overall"], 57);
        assert!(value["keywords_detail"]["must"].is_array());
    }
}
