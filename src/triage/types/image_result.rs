use serde::{Deserialize, Serialize};

use super::levels::{DebrisRisk, FireRisk, FloodSeverity, Priority, Visibility};

/// Scene heuristics for a single uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageResult {
    pub water_coverage: f64,
    pub flood_severity: FloodSeverity,
    pub image_priority: Priority,
    pub visibility: Visibility,
    pub fire_risk: FireRisk,
    pub debris_risk: DebrisRisk,
    // Raw measurements behind the levels above.
    pub brightness: f64,
    pub fire_ratio: f64,
    pub edge_density: f64,
}
