//! Polygon approximation of ring segments.

use std::f64::consts::TAU;

use crate::segment::Segment;

/// Edges per unit of quality for a full turn (quality 1 = one edge per 72°).
const EDGES_PER_TURN_PER_QUALITY: f64 = 5.0;

/// A point in drawing coordinates, centered on the sunburst.
pub type Point = (f64, f64);

/// Number of straight edges used for an arc of `angle_fraction` turns.
///
/// Grows linearly with both arguments and is never zero, so even the
/// thinnest sliver keeps its curved sides.
pub fn edge_count(angle_fraction: f64, quality: u32) -> u32 {
    let edges = angle_fraction.max(0.0) * f64::from(quality) * EDGES_PER_TURN_PER_QUALITY;
    // The cast saturates at u32::MAX for huge products
    (edges.floor() as u32).saturating_add(1)
}

/// Point at `radius` and angular position `turns`.
pub fn polar(radius: f64, turns: f64) -> Point {
    let theta = turns * TAU;
    (radius * theta.cos(), radius * theta.sin())
}

/// Closed outline of a segment.
///
/// Walks the outer arc from start to end, then the inner arc back, with
/// `edge_count` edges per arc. The closing edge back to the first point is
/// implied.
pub fn arc_polygon(segment: &Segment) -> Vec<Point> {
    let edges = segment.edge_count.max(1);
    let step = segment.angle_fraction / f64::from(edges);
    let mut points = Vec::with_capacity(2 * (edges as usize + 1));

    for i in 0..=edges {
        points.push(polar(segment.outer_radius, segment.angle_start + step * f64::from(i)));
    }
    for i in (0..=edges).rev() {
        points.push(polar(segment.inner_radius, segment.angle_start + step * f64::from(i)));
    }

    points
}
