use image::{GrayImage, Luma, RgbImage};

use super::color::{gray_level, is_flame, is_water, Hsv};
use super::edges::{density, CannyEdgeDetector};
use crate::config::ImageThresholds;
use crate::error::TriageError;
use crate::triage::types::{
    DebrisRisk, FireRisk, FloodSeverity, ImageResult, Priority, Visibility,
};

/// Per-pixel tallies gathered in a single pass over the raster.
struct SceneStats {
    gray: GrayImage,
    brightness_sum: u64,
    water_pixels: u64,
    flame_pixels: u64,
    total_pixels: u64,
}

impl SceneStats {
    fn percentage(&self, count: u64) -> f64 {
        count as f64 * 100.0 / self.total_pixels as f64
    }

    fn mean_brightness(&self) -> f64 {
        self.brightness_sum as f64 / self.total_pixels as f64
    }
}

/// Colour and texture heuristics for a decoded scene photo.
#[derive(Debug, Clone)]
pub struct ImageAnalyzer {
    thresholds: ImageThresholds,
}

impl Default for ImageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageAnalyzer {
    pub fn new() -> Self {
        Self {
            thresholds: ImageThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: ImageThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn analyze(&self, image: &RgbImage) -> Result<ImageResult, TriageError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(TriageError::EmptyImage { width, height });
        }

        let stats = self.collect_stats(image);
        let t = &self.thresholds;

        let brightness = stats.mean_brightness();
        let visibility = if brightness > t.daylight_brightness {
            Visibility::Daylight
        } else {
            Visibility::LowVisibility
        };

        let water_coverage = stats.percentage(stats.water_pixels);
        let (flood_severity, mut image_priority) = if water_coverage >= t.severe_flood_coverage {
            (FloodSeverity::Severe, Priority::High)
        } else if water_coverage >= t.moderate_flood_coverage {
            (FloodSeverity::Moderate, Priority::Medium)
        } else {
            (FloodSeverity::Low, Priority::Low)
        };

        let fire_ratio = stats.percentage(stats.flame_pixels);
        let fire_risk = if fire_ratio > t.fire_ratio {
            // Fire escalates priority
            image_priority = Priority::High;
            FireRisk::Detected
        } else {
            FireRisk::None
        };

        let edges = CannyEdgeDetector::new(t.canny_low, t.canny_high).detect(&stats.gray);
        let edge_density = density(&edges);
        let debris_risk = if edge_density > t.debris_edge_density {
            DebrisRisk::High
        } else {
            DebrisRisk::Low
        };

        tracing::debug!(
            "Image analysis {}x{}: brightness={:.1}, water={:.1}%, fire={:.1}%, edges={:.1}%",
            width,
            height,
            brightness,
            water_coverage,
            fire_ratio,
            edge_density
        );

        Ok(ImageResult {
            water_coverage,
            flood_severity,
            image_priority,
            visibility,
            fire_risk,
            debris_risk,
            brightness,
            fire_ratio,
            edge_density,
        })
    }

    fn collect_stats(&self, image: &RgbImage) -> SceneStats {
        let (width, height) = image.dimensions();
        let mut stats = SceneStats {
            gray: GrayImage::new(width, height),
            brightness_sum: 0,
            water_pixels: 0,
            flame_pixels: 0,
            total_pixels: width as u64 * height as u64,
        };

        for (x, y, px) in image.enumerate_pixels() {
            let level = gray_level(px);
            stats.gray.put_pixel(x, y, Luma([level]));
            stats.brightness_sum += level as u64;

            let hsv = Hsv::from(px);
            if is_water(hsv) {
                stats.water_pixels += 1;
            }
            if is_flame(hsv) {
                stats.flame_pixels += 1;
            }
        }

        stats
    }
}
