//! Scoring configuration.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::collaborators::{
    GrammarChecker, LanguageToolClient, LexiconSentiment, NullGrammarChecker, SentimentAnalyzer,
};
use crate::report::default_wpm;
use crate::scoring::ScoringEngine;

fn default_language() -> String {
    "en-US".to_string()
}

fn default_true() -> bool {
    true
}

/// Engine configuration, loadable from TOML. The rubric itself is fixed;
/// configuration only covers request defaults and collaborator wiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Speaking pace assumed when a request omits `wpm`.
    #[serde(default = "default_wpm")]
    pub default_wpm: f64,

    /// Base URL of a LanguageTool-compatible grammar service. When absent,
    /// grammar is checked by a null checker that reports no errors.
    #[serde(default)]
    pub language_tool_url: Option<String>,

    /// Language code passed to the grammar service.
    #[serde(default = "default_language")]
    pub language: String,

    /// When true (the default), a collaborator failure degrades its
    /// dimension to a neutral input; when false, it fails the request.
    #[serde(default = "default_true")]
    pub degrade_on_collaborator_failure: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_wpm: default_wpm(),
            language_tool_url: None,
            language: default_language(),
            degrade_on_collaborator_failure: true,
        }
    }
}

impl ScoringConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config from {}", path.display()))
    }

    /// Build an engine wired to the configured collaborators.
    pub fn build_engine(&self) -> ScoringEngine {
        let grammar: Arc<dyn GrammarChecker> = match &self.language_tool_url {
            Some(url) => Arc::new(LanguageToolClient::new(url.clone(), self.language.clone())),
            None => Arc::new(NullGrammarChecker),
        };
        let sentiment: Arc<dyn SentimentAnalyzer> = Arc::new(LexiconSentiment);
        ScoringEngine::new(grammar, sentiment)
            .with_degraded_fallback(self.degrade_on_collaborator_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_middle_pace_band() {
        let config = ScoringConfig::default();
        assert_eq!(config.default_wpm, 120.0);
        assert!(config.language_tool_url.is_none());
        assert_eq!(config.language, "en-US");
        assert!(config.degrade_on_collaborator_failure);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: ScoringConfig =
            toml::from_str("language_tool_url = \"http://localhost:8010\"").unwrap();
        assert_eq!(config.default_wpm, 120.0);
        assert_eq!(
            config.language_tool_url.as_deref(),
            Some("http://localhost:8010")
        );
        assert!(config.degrade_on_collaborator_failure);
    }

    #[test]
    fn degraded_fallback_can_be_disabled() {
        let config: ScoringConfig =
            toml::from_str("degrade_on_collaborator_failure = false").unwrap();
        assert!(!config.degrade_on_collaborator_failure);
    }
}
