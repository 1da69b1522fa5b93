// Export modules for library usage
pub mod cli;
pub mod collaborators;
pub mod config;
pub mod errors;
pub mod io;
pub mod patterns;
pub mod report;
pub mod scoring;
pub mod text;

// Re-export commonly used types
pub use crate::collaborators::{
    GrammarChecker, GrammarMatch, LanguageToolClient, LexiconSentiment, NullGrammarChecker,
    SentimentAnalyzer, SentimentScores,
};
pub use crate::config::ScoringConfig;
pub use crate::errors::{CollaboratorError, ScoreError};
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
pub use crate::report::{parse_request, ScoreReport, ScoreRequest};
pub use crate::scoring::{
    Dimension, FillerFindings, GoodCategory, KeywordDetail, MustCategory, ScoreBreakdown,
    ScoringEngine,
};
