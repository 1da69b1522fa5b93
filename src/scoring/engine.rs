//! The aggregator: runs all eight dimension scorers and folds the results
//! into a [`ScoreBreakdown`].

use std::sync::Arc;

use log::{debug, warn};

use crate::collaborators::{GrammarChecker, SentimentAnalyzer, SentimentScores};
use crate::errors::ScoreError;
use crate::report::ScoreRequest;
use crate::scoring::breakdown::{Dimension, ScoreBreakdown};
use crate::scoring::{filler, flow, grammar, keywords, pace, salutation, sentiment, vocabulary};
use crate::text;

/// Stateless scoring engine. Holds the two process-wide collaborators;
/// everything else is a pure function of the request.
pub struct ScoringEngine {
    grammar: Arc<dyn GrammarChecker>,
    sentiment: Arc<dyn SentimentAnalyzer>,
    degrade_on_failure: bool,
}

/// Results of the six collaborator-free dimensions.
struct PureScores {
    salutation: u32,
    keywords: u32,
    keyword_detail: crate::scoring::KeywordDetail,
    flow: u32,
    pace: u32,
    vocabulary: u32,
    vocabulary_ratio: f64,
    filler: filler::FillerOutcome,
}

impl PureScores {
    fn compute(normalized: &str, wpm: f64) -> Self {
        let (keywords, keyword_detail) = keywords::score(normalized);
        let (vocabulary, vocabulary_ratio) = vocabulary::score(normalized);
        Self {
            salutation: salutation::score(normalized),
            keywords,
            keyword_detail,
            flow: flow::score(normalized),
            pace: pace::score(wpm),
            vocabulary,
            vocabulary_ratio,
            filler: filler::score(normalized),
        }
    }
}

impl ScoringEngine {
    pub fn new(grammar: Arc<dyn GrammarChecker>, sentiment: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            grammar,
            sentiment,
            degrade_on_failure: true,
        }
    }

    /// Control the degraded-mode fallback. Disabled, a collaborator
    /// failure fails the whole request instead of substituting a neutral
    /// input.
    pub fn with_degraded_fallback(mut self, enabled: bool) -> Self {
        self.degrade_on_failure = enabled;
        self
    }

    /// Score a transcript at the given speaking pace.
    ///
    /// The collaborator calls are the only variable-latency work, so they
    /// run alongside the pure dimensions. By default a collaborator
    /// failure degrades its dimension to a neutral input (zero errors /
    /// all-neutral sentiment) and lists it in `degraded`; with the
    /// fallback disabled the failure is returned instead.
    pub fn evaluate(&self, transcript: &str, wpm: f64) -> Result<ScoreBreakdown, ScoreError> {
        let normalized = text::normalize(transcript);
        let word_count = text::token_count(transcript);

        let ((grammar_result, sentiment_result), pure) = rayon::join(
            || {
                rayon::join(
                    || self.grammar.check(transcript),
                    || self.sentiment.analyze(transcript),
                )
            },
            || PureScores::compute(&normalized, wpm),
        );

        let mut degraded = Vec::new();
        let error_count = match grammar_result {
            Ok(matches) => matches.len(),
            Err(err) if self.degrade_on_failure => {
                warn!("grammar checker unavailable, scoring with zero errors: {err}");
                degraded.push(Dimension::Grammar);
                0
            }
            Err(err) => return Err(err.into()),
        };
        let polarity = match sentiment_result {
            Ok(scores) => scores,
            Err(err) if self.degrade_on_failure => {
                warn!("sentiment analyzer unavailable, scoring as neutral: {err}");
                degraded.push(Dimension::Sentiment);
                SentimentScores::neutral()
            }
            Err(err) => return Err(err.into()),
        };

        let (grammar_score, grammar_quality) = grammar::score(error_count, word_count);
        let sentiment_score = sentiment::score(polarity.pos);

        let overall = pure.salutation
            + pure.keywords
            + pure.flow
            + pure.pace
            + grammar_score
            + pure.vocabulary
            + pure.filler.score
            + sentiment_score;

        debug!(
            "scored transcript: overall={overall} salutation={} keywords={} flow={} pace={} \
             grammar={grammar_score} vocabulary={} filler={} sentiment={sentiment_score}",
            pure.salutation, pure.keywords, pure.flow, pure.pace, pure.vocabulary, pure.filler.score,
        );

        Ok(ScoreBreakdown {
            salutation: pure.salutation,
            keywords: pure.keywords,
            keyword_detail: pure.keyword_detail,
            flow: pure.flow,
            pace: pure.pace,
            grammar: grammar_score,
            grammar_quality,
            vocabulary: pure.vocabulary,
            vocabulary_ratio: pure.vocabulary_ratio,
            filler: pure.filler.score,
            filler_rate: pure.filler.rate,
            filler_findings: pure.filler.findings,
            sentiment: sentiment_score,
            sentiment_positivity: polarity.pos,
            overall,
            degraded,
        })
    }

    /// Score a structured request, applying its defaults.
    pub fn evaluate_request(&self, request: &ScoreRequest) -> Result<ScoreBreakdown, ScoreError> {
        self.evaluate(&request.text, request.wpm_or_default())
    }
}
