use image::DynamicImage;

use crate::config::TriageConfig;
use crate::error::TriageError;
use crate::triage::services::{fuse, ActionPlanner, ImageAnalyzer, TextAnalyzer};
use crate::triage::types::TriageReport;

/// Runs text analysis, optional image analysis, fusion and planning for one report.
///
/// Holds only immutable settings, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TriageEngine {
    text_analyzer: TextAnalyzer,
    image_analyzer: ImageAnalyzer,
    action_planner: ActionPlanner,
}

impl TriageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &TriageConfig) -> Self {
        Self {
            text_analyzer: TextAnalyzer::new().with_scoring(config.text.clone()),
            image_analyzer: ImageAnalyzer::new().with_thresholds(config.image.clone()),
            action_planner: ActionPlanner::new(),
        }
    }

    /// Empty text and a missing image are both valid; a zero-area image is not.
    pub fn predict(
        &self,
        text: &str,
        image: Option<&DynamicImage>,
    ) -> Result<TriageReport, TriageError> {
        let text_result = self.text_analyzer.analyze(text);

        let image_result = image
            .map(|img| self.image_analyzer.analyze(&img.to_rgb8()))
            .transpose()?;

        let fused = fuse(text_result, image_result);
        let action_plan = self.action_planner.plan(&fused, text);

        tracing::info!(
            "Triage complete: priority={}, category={}, flags={}, image={}",
            fused.final_priority,
            fused.final_category,
            fused.risk_flags.len(),
            fused.image_result.is_some()
        );

        Ok(TriageReport::new(fused, action_plan))
    }
}
