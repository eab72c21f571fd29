//! Drawing sink interface and the render driver.

use diskring_core::{DirNode, RenderError, Rgb, VisualConfig};

use crate::engine::layout;
use crate::segment::Segment;

/// Destination for laid-out segments.
///
/// A sink owns its pen state (current fill color, output buffer, screen);
/// the layout engine only talks to it through these calls and never
/// re-enters it.
pub trait DrawSink {
    /// Set the fill color for subsequent arcs.
    fn set_fill_color(&mut self, color: Rgb) -> Result<(), RenderError>;

    /// Draw one filled, outlined arc with the current fill color.
    fn draw_arc_segment(&mut self, segment: &Segment) -> Result<(), RenderError>;

    /// Complete the output: persist the file or show the display.
    fn finalize(&mut self) -> Result<(), RenderError>;

    /// Draw a segment in its own color.
    fn begin_segment(&mut self, segment: &Segment) -> Result<(), RenderError> {
        self.set_fill_color(segment.color)?;
        self.draw_arc_segment(segment)
    }
}

/// Outcome of a successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of segments drawn.
    pub segments: usize,
    /// Tree depth used for color falloff.
    pub depth: u32,
}

/// Stream the layout of `root` into `sink` and finalize it.
///
/// Each segment is drawn as soon as it is produced. The first sink error
/// aborts rendering without finalizing.
pub fn render<S: DrawSink + ?Sized>(
    root: &DirNode,
    config: &VisualConfig,
    sink: &mut S,
) -> Result<RenderSummary, RenderError> {
    let segments = layout(root, config);
    let depth = segments.depth();
    let mut count = 0;

    for segment in segments {
        sink.begin_segment(&segment)?;
        count += 1;
    }
    sink.finalize()?;

    tracing::info!(segments = count, depth, "render complete");
    Ok(RenderSummary {
        segments: count,
        depth,
    })
}
