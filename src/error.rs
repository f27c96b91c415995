use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("Report has neither a message nor an image.")]
    EmptyReport,
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Triage task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
