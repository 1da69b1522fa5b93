//! Blocking client for a LanguageTool-compatible `/v2/check` endpoint.

use serde::Deserialize;

use crate::collaborators::{GrammarChecker, GrammarMatch};
use crate::errors::CollaboratorError;

/// HTTP grammar checker. One client is built at startup and shared across
/// requests; `reqwest::blocking::Client` is safe for concurrent use.
pub struct LanguageToolClient {
    client: reqwest::blocking::Client,
    base_url: String,
    language: String,
}

impl LanguageToolClient {
    pub fn new(base_url: impl Into<String>, language: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.into(),
        }
    }

    fn check_url(&self) -> String {
        format!("{}/v2/check", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    message: String,
    offset: usize,
    length: usize,
    rule: RawRule,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    id: String,
}

impl GrammarChecker for LanguageToolClient {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>, CollaboratorError> {
        let url = self.check_url();
        let response = self
            .client
            .post(&url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .map_err(|source| CollaboratorError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let parsed: CheckResponse = response
            .json()
            .map_err(|source| CollaboratorError::Http { url, source })?;

        Ok(parsed
            .matches
            .into_iter()
            .map(|m| GrammarMatch {
                message: m.message,
                offset: m.offset,
                length: m.length,
                rule: m.rule.id,
            })
            .collect())
    }
}
