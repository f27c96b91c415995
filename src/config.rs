use serde::Deserialize;

use crate::error::TriageError;

/// Optional settings file, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "triage";
/// Environment prefix, e.g. `TRIAGE__IMAGE__DAYLIGHT_BRIGHTNESS=90`.
pub const ENV_PREFIX: &str = "TRIAGE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub text: TextScoring,
    pub image: ImageThresholds,
}

/// Weights used by the keyword scorer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextScoring {
    pub critical_weight: f32,
    pub keyword_weight: f32,
    pub high_score: f32,
    pub medium_score: f32,
    pub high_confidence: f32,
    pub base_confidence: f32,
}

/// Scene heuristics thresholds. Percentages are on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageThresholds {
    pub daylight_brightness: f64,
    pub severe_flood_coverage: f64,
    pub moderate_flood_coverage: f64,
    pub fire_ratio: f64,
    pub debris_edge_density: f64,
    pub canny_low: f64,
    pub canny_high: f64,
}

impl Default for TextScoring {
    fn default() -> Self {
        Self {
            critical_weight: 2.0,
            keyword_weight: 0.5,
            high_score: 2.0,
            medium_score: 1.0,
            high_confidence: 0.85,
            base_confidence: 0.6,
        }
    }
}

impl Default for ImageThresholds {
    fn default() -> Self {
        Self {
            daylight_brightness: 80.0,
            severe_flood_coverage: 35.0,
            moderate_flood_coverage: 18.0,
            fire_ratio: 2.0,
            debris_edge_density: 15.0,
            canny_low: 100.0,
            canny_high: 200.0,
        }
    }
}

impl TriageConfig {
    /// Layers `triage.{toml,yaml,json}` and `TRIAGE__*` variables over the defaults.
    pub fn load() -> Result<Self, TriageError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
