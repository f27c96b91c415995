//! Keyword tables used by the text analyzer.
//!
//! Tables are plain data; the word-boundary patterns built from them are
//! compiled once per process and shared read-only.

use lazy_static::lazy_static;
use regex::Regex;

use crate::triage::types::Category;

/// Injury and illness terms
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "bleeding",
    "blood",
    "hurt",
    "injury",
    "injured",
    "pain",
    "dying",
    "death",
    "unconscious",
    "fainted",
    "broke",
    "broken",
    "wound",
    "heart attack",
    "stroke",
    "seizure",
];

/// Entrapment and structural hazard terms
pub const RESCUE_KEYWORDS: &[&str] = &[
    "trapped",
    "stuck",
    "flood",
    "water rising",
    "fire",
    "burning",
    "collapse",
    "collapsed",
    "rubble",
    "buried",
    "roof",
    "sinking",
    "stranded",
];

/// Supply and shelter terms
pub const LOGISTICS_KEYWORDS: &[&str] = &[
    "food", "water", "thirsty", "hungry", "shelter", "blanket", "cold", "clothes", "supplies",
    "medicine", "battery", "power",
];

/// Terms that push a report towards high priority regardless of category
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "dying",
    "heavy bleeding",
    "unconscious",
    "trapped",
    "fire",
    "rising",
    "now",
    "immediately",
    "emergency",
    "critical",
];

/// People who need assistance first
pub const VULNERABLE_KEYWORDS: &[&str] = &[
    "pregnant",
    "baby",
    "child",
    "infant",
    "kid",
    "elderly",
    "senior",
    "diabetic",
    "insulin",
    "injured",
    "wheelchair",
    "disabled",
    "handicapped",
];

/// Category lexicons in declaration order. The order is also the tie-break order.
pub const CATEGORY_LEXICON: &[(Category, &[&str])] = &[
    (Category::Medical, MEDICAL_KEYWORDS),
    (Category::Rescue, RESCUE_KEYWORDS),
    (Category::Logistics, LOGISTICS_KEYWORDS),
];

/// A keyword with its compiled whole-word pattern.
#[derive(Debug)]
pub struct KeywordPattern {
    pub keyword: &'static str,
    pattern: Regex,
}

impl KeywordPattern {
    fn new(keyword: &'static str) -> Self {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
            .expect("escaped keyword is a valid pattern");
        Self { keyword, pattern }
    }

    /// `text` must already be lowercase.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

fn compile(keywords: &'static [&'static str]) -> Vec<KeywordPattern> {
    keywords.iter().copied().map(KeywordPattern::new).collect()
}

lazy_static! {
    pub static ref CATEGORY_PATTERNS: Vec<(Category, Vec<KeywordPattern>)> = CATEGORY_LEXICON
        .iter()
        .map(|&(category, keywords)| (category, compile(keywords)))
        .collect();
    pub static ref CRITICAL_PATTERNS: Vec<KeywordPattern> = compile(CRITICAL_KEYWORDS);
    pub static ref VULNERABLE_PATTERNS: Vec<KeywordPattern> = compile(VULNERABLE_KEYWORDS);
}
