//! SVG output.

use std::path::Path;

use diskring_core::{RenderError, Rgb, VisualConfig};
use diskring_layout::{DrawSink, Segment, arc_polygon};
use humansize::{BINARY, format_size};

use crate::atomic::AtomicFile;

/// Writes the sunburst as a standalone SVG image.
///
/// Each arc becomes a `<path>` whose `<title>` shows the entry name and size
/// as a hover tooltip in browsers.
pub struct SvgSink {
    file: AtomicFile,
    fill: Rgb,
}

impl SvgSink {
    /// Start a document for a tree of the given depth.
    pub fn create(path: &Path, config: &VisualConfig, depth: u32) -> Result<Self, RenderError> {
        let (width, height) = config.window_size(depth);
        let (half_w, half_h) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
        let mut file = AtomicFile::create(path)?;

        writeln!(file, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            file,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{} {} {width} {height}">"#,
            -half_w, -half_h
        )?;
        writeln!(
            file,
            r#"<rect x="{}" y="{}" width="{width}" height="{height}" fill="{}"/>"#,
            -half_w,
            -half_h,
            config.background_color.to_hex()
        )?;
        // SVG's y axis points down; flip it so angles run counter-clockwise
        writeln!(
            file,
            r#"<g transform="scale(1,-1)" stroke="{}" stroke-width="{}" stroke-linejoin="round">"#,
            config.line_color.to_hex(),
            config.line_width
        )?;

        Ok(Self {
            file,
            fill: Rgb::BLACK,
        })
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl DrawSink for SvgSink {
    fn set_fill_color(&mut self, color: Rgb) -> Result<(), RenderError> {
        self.fill = color;
        Ok(())
    }

    fn draw_arc_segment(&mut self, segment: &Segment) -> Result<(), RenderError> {
        let points = arc_polygon(segment);
        let Some(((x0, y0), rest)) = points.split_first() else {
            return Ok(());
        };

        let mut data = format!("M{x0:.3},{y0:.3}");
        for (x, y) in rest {
            data.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        data.push_str(" Z");

        writeln!(
            self.file,
            r#"<path d="{data}" fill="{}"><title>{} ({})</title></path>"#,
            self.fill.to_hex(),
            escape(&segment.name),
            format_size(segment.size, BINARY)
        )
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        writeln!(self.file, "</g>\n</svg>")?;
        self.file.commit()
    }
}

/// Escape text for XML character data.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
