pub mod action_planner;
pub mod fusion;
pub mod image;
pub mod text_analyzer;

pub use action_planner::ActionPlanner;
pub use fusion::fuse;
pub use self::image::ImageAnalyzer;
pub use text_analyzer::TextAnalyzer;
