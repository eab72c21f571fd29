//! Segment color derivation.
//!
//! Hue follows the angular midpoint of a segment and wraps the color wheel
//! twice per turn. Saturation and value fall off with ring level, so outer
//! rings read as progressively darker and greyer.

use diskring_core::Rgb;

/// Hue turns per full revolution of the sunburst.
const HUE_CYCLES: f64 = 2.0;

/// Saturation loses at most this share across all rings.
const SATURATION_FALLOFF: f64 = 1.0 / 8.0;

/// Color for a segment at `level` of a tree of the given `depth`.
///
/// Strictly decreasing in `level` for both saturation and value, and
/// continuous in the angular position. Levels are measured against
/// `depth + 1` so the outermost ring never turns black.
pub fn segment_color(level: u32, depth: u32, angle_start: f64, angle_fraction: f64) -> Rgb {
    let midpoint = angle_start + angle_fraction / 2.0;
    let falloff = f64::from(level) / (f64::from(depth) + 1.0);

    Rgb::from_hsv(
        midpoint * HUE_CYCLES,
        1.0 - falloff * SATURATION_FALLOFF,
        1.0 - falloff,
    )
}
