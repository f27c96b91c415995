pub mod engine;
pub mod lexicon;
pub mod service;
pub mod services;
pub mod types;

pub use engine::TriageEngine;
pub use service::{TriageRequest, TriageService};
pub use types::{
    ActionPlan, Category, DebrisRisk, FireRisk, FloodSeverity, FusedResult, ImageResult, Priority,
    TextResult, TriageReport, Visibility,
};
