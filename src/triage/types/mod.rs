mod image_result;
mod levels;
mod report;
mod text_result;

pub use image_result::ImageResult;
pub use levels::{Category, DebrisRisk, FireRisk, FloodSeverity, Priority, Visibility};
pub use report::{ActionPlan, FusedResult, TriageReport};
pub use text_result::TextResult;
