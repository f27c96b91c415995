use image::{GrayImage, Luma};

// tan(22.5°) and tan(67.5°), sector limits for gradient direction.
const TAN_22_5: f32 = 0.414_213_57;
const TAN_67_5: f32 = 2.414_213_6;

/// Canny edge detector: 3x3 Sobel, L1 magnitude, non-maximum suppression and
/// hysteresis. Returns a mask with edge pixels set to 255.
pub struct CannyEdgeDetector {
    low_threshold: f64,
    high_threshold: f64,
}

impl CannyEdgeDetector {
    pub fn new(low_threshold: f64, high_threshold: f64) -> Self {
        Self {
            low_threshold,
            high_threshold,
        }
    }

    pub fn detect(&self, gray: &GrayImage) -> GrayImage {
        let (width, height) = gray.dimensions();
        let mut edges = GrayImage::new(width, height);
        if width == 0 || height == 0 {
            return edges;
        }

        let (w, h) = (width as usize, height as usize);
        let (gx, gy) = Self::sobel(gray);
        let magnitude: Vec<i32> = gx
            .iter()
            .zip(gy.iter())
            .map(|(dx, dy)| dx.abs() + dy.abs())
            .collect();

        let mag_at = |x: i64, y: i64| -> i32 {
            if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                0
            } else {
                magnitude[y as usize * w + x as usize]
            }
        };

        // 0 = none, 1 = weak candidate, 2 = strong
        let mut class = vec![0u8; w * h];
        let mut stack = Vec::new();

        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                let m = magnitude[idx];
                if (m as f64) <= self.low_threshold {
                    continue;
                }

                let (dx, dy) = (gx[idx], gy[idx]);
                let (ax, ay) = (dx.abs() as f32, dy.abs() as f32);
                let (xi, yi) = (x as i64, y as i64);

                // Axis-aligned sectors keep the first of two equal maxima;
                // diagonal sectors require a strict maximum on both sides.
                let ((px, py), (nx, ny), diagonal) = if ay <= ax * TAN_22_5 {
                    ((xi - 1, yi), (xi + 1, yi), false)
                } else if ay > ax * TAN_67_5 {
                    ((xi, yi - 1), (xi, yi + 1), false)
                } else if (dx < 0) == (dy < 0) {
                    ((xi - 1, yi - 1), (xi + 1, yi + 1), true)
                } else {
                    ((xi + 1, yi - 1), (xi - 1, yi + 1), true)
                };

                let next = mag_at(nx, ny);
                let beats_next = if diagonal { m > next } else { m >= next };
                if m > mag_at(px, py) && beats_next {
                    if (m as f64) > self.high_threshold {
                        class[idx] = 2;
                        stack.push((x, y));
                    } else {
                        class[idx] = 1;
                    }
                }
            }
        }

        while let Some((x, y)) = stack.pop() {
            edges.put_pixel(x as u32, y as u32, Luma([255]));
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    let idx = ny * w + nx;
                    if class[idx] == 1 {
                        class[idx] = 2;
                        stack.push((nx, ny));
                    }
                }
            }
        }

        edges
    }

    /// Horizontal and vertical Sobel responses with replicated borders.
    fn sobel(gray: &GrayImage) -> (Vec<i32>, Vec<i32>) {
        let (width, height) = gray.dimensions();
        let (w, h) = (width as i64, height as i64);
        let at = |x: i64, y: i64| -> i32 {
            let cx = x.clamp(0, w - 1) as u32;
            let cy = y.clamp(0, h - 1) as u32;
            gray.get_pixel(cx, cy)[0] as i32
        };

        let mut gx = Vec::with_capacity((w * h) as usize);
        let mut gy = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                let dx = (at(x + 1, y - 1) + 2 * at(x + 1, y) + at(x + 1, y + 1))
                    - (at(x - 1, y - 1) + 2 * at(x - 1, y) + at(x - 1, y + 1));
                let dy = (at(x - 1, y + 1) + 2 * at(x, y + 1) + at(x + 1, y + 1))
                    - (at(x - 1, y - 1) + 2 * at(x, y - 1) + at(x + 1, y - 1));
                gx.push(dx);
                gy.push(dy);
            }
        }
        (gx, gy)
    }
}

/// Percentage of pixels set in a mask.
pub fn density(mask: &GrayImage) -> f64 {
    let total = mask.width() as u64 * mask.height() as u64;
    if total == 0 {
        return 0.0;
    }
    let set = mask.pixels().filter(|p| p[0] > 0).count() as u64;
    set as f64 * 100.0 / total as f64
}
