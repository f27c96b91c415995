use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::image_result::ImageResult;
use super::levels::{Category, Priority};
use super::text_result::TextResult;

/// Text and image findings reconciled into one decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FusedResult {
    pub final_priority: Priority,
    pub final_category: Category,
    pub text_result: TextResult,
    pub image_result: Option<ImageResult>,
    pub risk_flags: IndexSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionPlan {
    pub immediate: Vec<String>,
    pub not_to_do: Vec<String>,
    pub checklist: Vec<String>,
}

/// Everything the presentation layer needs to render one triage call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub text_result: TextResult,
    pub image_result: Option<ImageResult>,
    pub final_priority: Priority,
    pub final_category: Category,
    pub risk_flags: IndexSet<String>,
    pub action_plan: ActionPlan,
}

impl TriageReport {
    pub fn new(fused: FusedResult, action_plan: ActionPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            text_result: fused.text_result,
            image_result: fused.image_result,
            final_priority: fused.final_priority,
            final_category: fused.final_category,
            risk_flags: fused.risk_flags,
            action_plan,
        }
    }

    /// Compares the triage outcome, ignoring the per-call id and timestamp.
    pub fn same_outcome(&self, other: &TriageReport) -> bool {
        self.text_result == other.text_result
            && self.image_result == other.image_result
            && self.final_priority == other.final_priority
            && self.final_category == other.final_category
            && self.risk_flags == other.risk_flags
            && self.action_plan == other.action_plan
    }
}
