use image::Rgb;

/// BT.601 luma, rounded to the nearest level.
pub fn gray_level(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    luma.round().min(255.0) as u8
}

/// HSV on the 8-bit vision scale: hue is degrees / 2 (0..=180), saturation and value 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl From<&Rgb<u8>> for Hsv {
    fn from(px: &Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        let (rf, gf, bf) = (r as f32, g as f32, b as f32);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = (max - min) as f32;

        let s = if max == 0 {
            0.0
        } else {
            255.0 * diff / max as f32
        };

        let mut degrees = if diff == 0.0 {
            0.0
        } else if max == r {
            60.0 * (gf - bf) / diff
        } else if max == g {
            120.0 + 60.0 * (bf - rf) / diff
        } else {
            240.0 + 60.0 * (rf - gf) / diff
        };
        if degrees < 0.0 {
            degrees += 360.0;
        }

        Self {
            h: (degrees / 2.0).round().min(180.0) as u8,
            s: s.round().min(255.0) as u8,
            v: max,
        }
    }
}

/// Inclusive HSV box. Saturation and value are open-ended upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvBand {
    pub hue_min: u8,
    pub hue_max: u8,
    pub min_saturation: u8,
    pub min_value: u8,
}

impl HsvBand {
    pub const fn new(hue_min: u8, hue_max: u8, min_saturation: u8, min_value: u8) -> Self {
        Self {
            hue_min,
            hue_max,
            min_saturation,
            min_value,
        }
    }

    pub fn contains(&self, hsv: Hsv) -> bool {
        (self.hue_min..=self.hue_max).contains(&hsv.h)
            && hsv.s >= self.min_saturation
            && hsv.v >= self.min_value
    }
}

/// Muddy / brown flood water.
pub const MUD_BAND: HsvBand = HsvBand::new(10, 30, 40, 40);
/// Murky / blue flood water.
pub const MURKY_BAND: HsvBand = HsvBand::new(90, 130, 50, 50);
/// Red-orange flame, low end of the hue wheel.
pub const FLAME_LOW_BAND: HsvBand = HsvBand::new(0, 10, 100, 100);
/// Red flame wrapping past magenta.
pub const FLAME_HIGH_BAND: HsvBand = HsvBand::new(160, 180, 100, 100);

pub fn is_water(hsv: Hsv) -> bool {
    MUD_BAND.contains(hsv) || MURKY_BAND.contains(hsv)
}

pub fn is_flame(hsv: Hsv) -> bool {
    FLAME_LOW_BAND.contains(hsv) || FLAME_HIGH_BAND.contains(hsv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(r: u8, g: u8, b: u8) -> Hsv {
        Hsv::from(&Rgb([r, g, b]))
    }

    #[test]
    fn test_gray_level() {
        assert_eq!(gray_level(&Rgb([0, 0, 0])), 0);
        assert_eq!(gray_level(&Rgb([255, 255, 255])), 255);
        assert_eq!(gray_level(&Rgb([255, 0, 0])), 76);
        assert_eq!(gray_level(&Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv(255, 0, 0), Hsv { h: 0, s: 255, v: 255 });
        assert_eq!(hsv(0, 255, 0), Hsv { h: 60, s: 255, v: 255 });
        assert_eq!(hsv(0, 0, 255), Hsv { h: 120, s: 255, v: 255 });
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let grey = hsv(128, 128, 128);
        assert_eq!(grey.s, 0);
        assert!(!is_water(grey));
        assert!(!is_flame(grey));
    }

    #[test]
    fn test_bands() {
        assert!(is_water(hsv(0, 0, 255)));
        assert!(is_water(hsv(139, 90, 43))); // brown
        assert!(is_flame(hsv(255, 0, 0)));
        assert!(is_flame(hsv(255, 0, 64))); // crimson, wraps past magenta
        assert!(!is_flame(hsv(0, 255, 0)));
        assert!(!is_water(hsv(0, 255, 0)));
    }
}
