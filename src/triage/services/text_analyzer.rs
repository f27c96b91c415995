use indexmap::IndexSet;

use crate::config::TextScoring;
use crate::triage::lexicon::{CATEGORY_PATTERNS, CRITICAL_PATTERNS, VULNERABLE_PATTERNS};
use crate::triage::types::{Category, Priority, TextResult};

/// Keyword scorer for free-text distress messages.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    scoring: TextScoring,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    pub fn new() -> Self {
        Self {
            scoring: TextScoring::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: TextScoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn analyze(&self, text: &str) -> TextResult {
        if text.is_empty() {
            return TextResult::empty();
        }

        let text_lower = text.to_lowercase();

        let risk_flags: IndexSet<String> = VULNERABLE_PATTERNS
            .iter()
            .filter(|p| p.is_match(&text_lower))
            .map(|p| p.keyword.to_string())
            .collect();

        // Every hit in match order, repeats included; feeds the explanation.
        let mut hits: Vec<&'static str> = Vec::new();
        let mut detected_categories = Vec::new();
        for (category, patterns) in CATEGORY_PATTERNS.iter() {
            for pattern in patterns.iter().filter(|p| p.is_match(&text_lower)) {
                if !detected_categories.contains(category) {
                    detected_categories.push(*category);
                }
                hits.push(pattern.keyword);
            }
        }

        let category = Self::resolve_category(&detected_categories);

        let mut score = 0.0;
        for pattern in CRITICAL_PATTERNS.iter().filter(|p| p.is_match(&text_lower)) {
            score += self.scoring.critical_weight;
            hits.push(pattern.keyword);
        }

        let matched_keywords: IndexSet<String> = hits.iter().map(|k| k.to_string()).collect();
        score += matched_keywords.len() as f32 * self.scoring.keyword_weight;

        let has = |category: Category| detected_categories.contains(&category);
        let mut priority = if score >= self.scoring.high_score
            || has(Category::Medical)
            || has(Category::Rescue)
        {
            Priority::High
        } else if score >= self.scoring.medium_score || has(Category::Logistics) {
            Priority::Medium
        } else {
            Priority::Low
        };

        if !risk_flags.is_empty() {
            priority = priority.escalate();
        }

        let confidence = if priority == Priority::High {
            self.scoring.high_confidence
        } else {
            self.scoring.base_confidence
        };

        let explanation = if hits.is_empty() {
            "No specific keywords detected.".to_string()
        } else {
            format!("Detected keywords: {}.", hits.join(", "))
        };

        tracing::debug!(
            "Text analysis: category={}, priority={}, score={}, flags={:?}",
            category,
            priority,
            score,
            risk_flags
        );

        TextResult {
            category,
            priority,
            confidence,
            explanation,
            keyword_count: matched_keywords.len(),
            matched_keywords,
            risk_flags,
        }
    }

    /// Medical beats Rescue beats everything else; otherwise the first category found.
    fn resolve_category(detected: &[Category]) -> Category {
        if detected.contains(&Category::Medical) {
            Category::Medical
        } else if detected.contains(&Category::Rescue) {
            Category::Rescue
        } else {
            detected.first().copied().unwrap_or(Category::General)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> TextResult {
        TextAnalyzer::new().analyze(text)
    }

    #[test]
    fn test_empty_text() {
        let result = analyze("");
        assert_eq!(result.category, Category::General);
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.confidence, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.risk_flags.is_empty());
        assert_eq!(result.keyword_count, 0);
        assert_eq!(result.explanation, "No text provided.");
    }

    #[test]
    fn test_trapped_elderly_is_high_rescue() {
        let result = analyze("My elderly father is trapped upstairs");
        assert_eq!(result.category, Category::Rescue);
        assert_eq!(result.priority, Priority::High);
        assert!(result.risk_flags.contains("elderly"));
        assert!(result.matched_keywords.contains("trapped"));
    }

    #[test]
    fn test_heavy_bleeding_is_high_medical() {
        let result = analyze("heavy bleeding, unconscious now");
        assert_eq!(result.category, Category::Medical);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.confidence, 0.85);
        for keyword in ["bleeding", "unconscious", "heavy bleeding", "now"] {
            assert!(result.matched_keywords.contains(keyword), "missing {keyword}");
        }
        assert_eq!(result.keyword_count, result.matched_keywords.len());
    }

    #[test]
    fn test_medical_wins_over_rescue() {
        let result = analyze("roof collapsed and he is bleeding");
        assert_eq!(result.category, Category::Medical);
    }

    #[test]
    fn test_rescue_wins_over_logistics() {
        let result = analyze("stranded without food");
        assert_eq!(result.category, Category::Rescue);
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_logistics_only_is_medium() {
        let result = analyze("We are hungry and need supplies");
        assert_eq!(result.category, Category::Logistics);
        assert_eq!(result.priority, Priority::Medium);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_vulnerability_escalates_medium_to_high() {
        let result = analyze("need food for the baby");
        assert_eq!(result.category, Category::Logistics);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.confidence, 0.85);
        assert!(result.risk_flags.contains("baby"));
    }

    #[test]
    fn test_vulnerability_escalates_low_to_medium() {
        let result = analyze("my child is with me");
        assert_eq!(result.category, Category::General);
        assert_eq!(result.priority, Priority::Medium);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_no_keywords() {
        let result = analyze("hello is anyone reading this");
        assert_eq!(result.category, Category::General);
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.explanation, "No specific keywords detected.");
    }

    #[test]
    fn test_critical_keyword_alone_is_high() {
        let result = analyze("please come immediately");
        assert_eq!(result.category, Category::General);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.explanation, "Detected keywords: immediately.");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = analyze("FIRE IN THE KITCHEN");
        assert_eq!(result.category, Category::Rescue);
        assert!(result.matched_keywords.contains("fire"));
    }

    #[test]
    fn test_keyword_in_both_lexicons_counted_once() {
        let result = analyze("fire");
        assert_eq!(result.keyword_count, 1);
        assert_eq!(result.matched_keywords.len(), 1);
        // The explanation lists every hit, so the Rescue and critical matches both show.
        assert_eq!(result.explanation, "Detected keywords: fire, fire.");
    }

    #[test]
    fn test_explanation_follows_match_order() {
        let result = analyze("trapped with no food, come now");
        assert_eq!(
            result.explanation,
            "Detected keywords: trapped, food, trapped, now."
        );
        assert_eq!(result.keyword_count, 3);
    }

    #[test]
    fn test_injured_is_medical_and_vulnerable() {
        let result = analyze("two injured people");
        assert_eq!(result.category, Category::Medical);
        assert!(result.risk_flags.contains("injured"));
        assert_eq!(result.priority, Priority::High);
    }
}
