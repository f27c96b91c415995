pub mod color;
pub mod edges;
pub mod image_analyzer;

pub use edges::CannyEdgeDetector;
pub use image_analyzer::ImageAnalyzer;
