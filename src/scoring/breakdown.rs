//! Score breakdown record and its supporting types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dimension maxima. `overall` ranges over [0, 100], the sum of these.
pub const MAX_SALUTATION: u32 = 5;
pub const MAX_KEYWORDS: u32 = 30;
pub const MAX_FLOW: u32 = 5;
pub const MAX_PACE: u32 = 10;
pub const MAX_GRAMMAR: u32 = 10;
pub const MAX_VOCABULARY: u32 = 10;
pub const MAX_FILLER: u32 = 15;
pub const MAX_SENTIMENT: u32 = 15;

/// Required content categories, in rubric declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MustCategory {
    Name,
    Age,
    ClassSchool,
    Family,
    Hobby,
}

/// Bonus content categories, in rubric declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoodCategory {
    Origin,
    Goal,
    FunFact,
    Achievement,
    Unique,
}

/// Which content categories matched at least one pattern. Labels appear in
/// category declaration order, not match-position order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordDetail {
    pub must: Vec<MustCategory>,
    pub good: Vec<GoodCategory>,
}

/// Per-filler occurrence counts; only non-zero entries are present.
pub type FillerFindings = BTreeMap<String, usize>;

/// Scoring dimensions, used to flag degraded sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Salutation,
    Keywords,
    Flow,
    Pace,
    Grammar,
    Vocabulary,
    Filler,
    Sentiment,
}

/// One sub-score per dimension plus diagnostics.
///
/// Invariants: every sub-score is one of its dimension's discrete allowed
/// values, and `overall` is exactly the arithmetic sum of the eight
/// sub-scores. A breakdown is built fresh per request and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub salutation: u32,
    pub keywords: u32,
    pub keyword_detail: KeywordDetail,
    pub flow: u32,
    pub pace: u32,
    pub grammar: u32,
    /// Raw grammar diagnostic: `1 - errors_per_100 / 100`. Not clamped;
    /// goes negative past one error per word.
    pub grammar_quality: f64,
    pub vocabulary: u32,
    /// Type-token ratio; 0 when the transcript has no word tokens.
    pub vocabulary_ratio: f64,
    pub filler: u32,
    /// Filler occurrences per 100 word tokens.
    pub filler_rate: f64,
    pub filler_findings: FillerFindings,
    pub sentiment: u32,
    /// Positivity value from the sentiment collaborator, in [0, 1].
    pub sentiment_positivity: f64,
    pub overall: u32,
    /// Dimensions scored from a neutral substitute after a collaborator
    /// failure. Empty on a clean run.
    pub degraded: Vec<Dimension>,
}
