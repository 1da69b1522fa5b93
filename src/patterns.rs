//! Static rubric pattern tables.
//!
//! Category order and per-category pattern order are load-bearing:
//! keyword scoring is first-pattern-wins within a category, matched labels
//! are reported in declaration order, and flow slots are compared against
//! their declaration order. These tables stay ordered slices — never maps.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::{GoodCategory, MustCategory};
use crate::text::word_bounded;

/// Points per matched must-have category.
pub const MUST_POINTS: u32 = 4;
/// Points per matched good-to-have category.
pub const GOOD_POINTS: u32 = 2;
/// Keyword score ceiling.
pub const KEYWORD_CAP: u32 = 30;

/// Enthusiastic openers, matched as substrings.
pub const STRONG_SALUTATIONS: &[&str] = &["i am excited to introduce", "feeling great"];

/// Time-of-day and audience greetings, matched as substrings.
pub const GOOD_SALUTATIONS: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
    "hello everyone",
];

/// Bare greetings, matched as whole words only.
pub static NORMAL_SALUTATIONS: Lazy<Vec<Regex>> =
    Lazy::new(|| ["hello", "hi"].iter().map(|s| word_bounded(s)).collect());

/// Verbal hedges and disfluencies. Several entries ("so", "right", "well",
/// "okay", "ah") are ordinary standalone words and over-count in plain
/// prose; known precision limitation of the vocabulary, kept as-is.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "hmm", "ah", "erm", "mm",
];

/// Filler vocabulary compiled to whole-word/phrase matchers.
pub static FILLER_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    FILLER_WORDS
        .iter()
        .map(|w| (*w, word_bounded(w)))
        .collect()
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("rubric pattern regex"))
        .collect()
}

/// Must-have content categories with their alternative patterns.
pub static MUST_CATEGORIES: Lazy<Vec<(MustCategory, Vec<Regex>)>> = Lazy::new(|| {
    vec![
        (
            MustCategory::Name,
            compile(&[r"\b[a-zA-Z]+ [a-zA-Z]+\b", r"my name is", r"myself", r"i am"]),
        ),
        (
            MustCategory::Age,
            compile(&[r"\bage \d{1,2}\b", r"\bi am \d{1,2}\b", r"\d{1,2} years old"]),
        ),
        (
            MustCategory::ClassSchool,
            compile(&[r"class", r"grade", r"section", r"school"]),
        ),
        (
            MustCategory::Family,
            compile(&[r"family", r"father", r"mother", r"parents", r"sibling"]),
        ),
        (
            MustCategory::Hobby,
            compile(&[r"hobby", r"i enjoy", r"i like", r"favourite", r"favorite"]),
        ),
    ]
});

/// Good-to-have content categories with their alternative patterns.
pub static GOOD_CATEGORIES: Lazy<Vec<(GoodCategory, Vec<Regex>)>> = Lazy::new(|| {
    vec![
        (
            GoodCategory::Origin,
            compile(&[r"i am from", r"i'm from", r"parents are from"]),
        ),
        (
            GoodCategory::Goal,
            compile(&[r"goal", r"ambition", r"want to be", r"dream"]),
        ),
        (
            GoodCategory::FunFact,
            compile(&[r"fun fact", r"one thing people", r"interesting thing"]),
        ),
        (
            GoodCategory::Achievement,
            compile(&[r"achievement", r"prize", r"won"]),
        ),
        (GoodCategory::Unique, compile(&[r"unique", r"special"])),
    ]
});

/// Narrative slots in the order a self-introduction is expected to follow:
/// greeting, name, age, family, goal/hobby/highlight, closing.
pub static FLOW_SLOTS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        (
            "greeting",
            r"(hello|hi|good morning|good afternoon|good evening|good day|hello everyone)",
        ),
        ("name", r"\b[a-zA-Z]+ [a-zA-Z]+\b"),
        ("age", r"age \d{1,2}|\bi am \d{1,2}\b"),
        ("family", r"(family|father|mother|parents|sibling)"),
        (
            "highlight",
            r"(goal|ambition|dream|hobby|fun fact|unique|interesting thing)",
        ),
        ("closing", r"(thank you|thanks)"),
    ]
    .iter()
    .map(|(name, p)| (*name, Regex::new(p).expect("flow slot regex")))
    .collect()
});
