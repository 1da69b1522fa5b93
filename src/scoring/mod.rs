pub mod breakdown;
pub mod engine;
pub mod filler;
pub mod flow;
pub mod grammar;
pub mod keywords;
pub mod pace;
pub mod salutation;
pub mod sentiment;
pub mod vocabulary;

pub use breakdown::{
    Dimension, FillerFindings, GoodCategory, KeywordDetail, MustCategory, ScoreBreakdown,
};
pub use engine::ScoringEngine;
