//! RGB colors with unit-range components.

use serde::{Deserialize, Serialize};

/// An RGB color with components in `0.0..=1.0`.
///
/// Serialized as a three-element array, e.g. `[1.0, 0.5, 0.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// Create a color from its components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSV. Hue wraps around (any real value is accepted);
    /// saturation and value are clamped to the unit range.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(v, v, v);
        }

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u8 % 6 {
            0 => Self::new(v, t, p),
            1 => Self::new(q, v, p),
            2 => Self::new(p, v, t),
            3 => Self::new(p, q, v),
            4 => Self::new(t, p, v),
            _ => Self::new(v, p, q),
        }
    }

    /// Check that every component lies in `0.0..=1.0`.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Components scaled to 8-bit channels.
    pub fn to_u8(&self) -> (u8, u8, u8) {
        let scale = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (scale(self.r), scale(self.g), scale(self.b))
    }

    /// Hex notation (`#rrggbb`).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}
