//! Radial sunburst layout engine for diskring.
//!
//! Turns an aggregated [`DirNode`] tree into ring segments: one arc per
//! entry, nested so that every arc spans exactly the share of its parent's
//! arc that its size represents.
//!
//! - [`layout`] yields [`Segment`]s lazily
//! - [`segment_color`] derives fill colors from angle and ring
//! - [`edge_count`] and [`arc_polygon`] handle curve tessellation
//! - [`render`] streams segments into any [`DrawSink`]
//!
//! # Example
//!
//! ```rust
//! use diskring_core::{DirNode, VisualConfig};
//! use diskring_layout::layout;
//!
//! let root = DirNode::directory("root", [DirNode::file("a", 100), DirNode::file("b", 300)]);
//! let fractions: Vec<f64> = layout(&root, &VisualConfig::default())
//!     .map(|s| s.angle_fraction)
//!     .collect();
//!
//! assert_eq!(fractions, [0.25, 0.75]);
//! ```

mod color;
mod engine;
mod segment;
mod sink;
mod tessellate;

pub use color::segment_color;
pub use engine::{SegmentIter, layout};
pub use segment::Segment;
pub use sink::{DrawSink, RenderSummary, render};
pub use tessellate::{Point, arc_polygon, edge_count, polar};

pub use diskring_core::{DirNode, RenderError, Rgb, VisualConfig};
