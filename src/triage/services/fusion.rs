use crate::triage::types::{
    Category, FireRisk, FloodSeverity, FusedResult, ImageResult, TextResult,
};

/// Reconciles text and image findings. Image evidence can raise priority but never lower it.
pub fn fuse(text_result: TextResult, image_result: Option<ImageResult>) -> FusedResult {
    let mut final_priority = text_result.priority;
    let mut final_category = text_result.category;

    if let Some(image) = &image_result {
        if image.image_priority > final_priority {
            final_priority = image.image_priority;
        }

        // Severe flood is checked before fire; both resolve to Rescue.
        if image.flood_severity == FloodSeverity::Severe || image.fire_risk == FireRisk::Detected {
            final_category = Category::Rescue;
        }
    }

    FusedResult {
        final_priority,
        final_category,
        risk_flags: text_result.risk_flags.clone(),
        text_result,
        image_result,
    }
}
