//! Externally-backed collaborators: grammar checking and sentiment analysis.
//!
//! Both are injected into the scoring engine as capabilities rather than
//! reached through globals, so tests substitute fakes. Implementations must
//! be safe for concurrent invocation (`Send + Sync`); the engine holds one
//! process-wide instance of each and reuses it across requests.

pub mod language_tool;
pub mod lexicon;

use serde::{Deserialize, Serialize};

use crate::errors::CollaboratorError;

pub use language_tool::LanguageToolClient;
pub use lexicon::LexiconSentiment;

/// A single issue reported by the grammar checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarMatch {
    pub message: String,
    pub offset: usize,
    pub length: usize,
    pub rule: String,
}

/// Polarity proportions from the sentiment analyzer. `pos`, `neu` and `neg`
/// are each in [0, 1]; `compound` is in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// All-neutral result, used by the degraded-mode policy.
    pub fn neutral() -> Self {
        Self {
            pos: 0.0,
            neu: 1.0,
            neg: 0.0,
            compound: 0.0,
        }
    }
}

/// Grammar-checking capability: `check(text)` yields the error matches
/// found in the text. Expected to be a blocking call with no built-in
/// timeout; callers wanting bounded latency impose one externally.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>, CollaboratorError>;
}

/// Sentiment-analysis capability.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<SentimentScores, CollaboratorError>;
}

/// Grammar checker used when no service is configured; reports no errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGrammarChecker;

impl GrammarChecker for NullGrammarChecker {
    fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>, CollaboratorError> {
        Ok(Vec::new())
    }
}
