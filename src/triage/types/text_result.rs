use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::levels::{Category, Priority};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextResult {
    pub category: Category,
    pub priority: Priority,
    pub confidence: f32,
    pub explanation: String,
    pub matched_keywords: IndexSet<String>,
    pub keyword_count: usize,
    pub risk_flags: IndexSet<String>,
}

impl TextResult {
    /// Result for a report that carries no message.
    pub fn empty() -> Self {
        Self {
            category: Category::General,
            priority: Priority::Low,
            confidence: 0.0,
            explanation: "No text provided.".to_string(),
            matched_keywords: IndexSet::new(),
            keyword_count: 0,
            risk_flags: IndexSet::new(),
        }
    }
}
