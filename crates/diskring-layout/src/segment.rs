//! Drawable ring segments.

use compact_str::CompactString;
use diskring_core::Rgb;

/// One arc of the sunburst.
///
/// Angles are fractions of a full turn, measured counter-clockwise from the
/// positive x axis. A segment's interval `[angle_start, angle_end)` always
/// lies within the interval of the segment one ring further in that
/// represents its parent directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Name of the entry this arc represents.
    pub name: CompactString,
    /// Size of the entry in bytes.
    pub size: u64,
    /// Ring index; the root's children are ring 1.
    pub ring_level: u32,
    /// Start of the arc in `[0, 1)`.
    pub angle_start: f64,
    /// Angular width in `(0, 1]`.
    pub angle_fraction: f64,
    /// Fill color.
    pub color: Rgb,
    /// Distance from the center to the inner edge.
    pub inner_radius: f64,
    /// Distance from the center to the outer edge.
    pub outer_radius: f64,
    /// Number of straight edges approximating each curved side.
    pub edge_count: u32,
}

impl Segment {
    /// End of the arc.
    pub fn angle_end(&self) -> f64 {
        self.angle_start + self.angle_fraction
    }

    /// Angular midpoint.
    pub fn midpoint(&self) -> f64 {
        self.angle_start + self.angle_fraction / 2.0
    }

    /// Radial thickness of the ring.
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}
