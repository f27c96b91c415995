pub mod config;
pub mod error;
pub mod triage;

pub use crate::config::TriageConfig;
pub use crate::error::TriageError;

pub use triage::{TriageEngine, TriageReport, TriageRequest, TriageService};
