//! Encapsulated PostScript output.

use std::path::Path;

use diskring_core::{RenderError, Rgb, VisualConfig};
use diskring_layout::{DrawSink, Segment, arc_polygon};

use crate::atomic::AtomicFile;

/// Writes the sunburst as an EPS document.
///
/// The page is `window_size` points large with the sunburst centered on it.
/// Nothing appears at the destination until [`DrawSink::finalize`] succeeds.
pub struct PostScriptSink {
    file: AtomicFile,
    fill: Rgb,
    line_color: Rgb,
    line_width: f64,
}

impl PostScriptSink {
    /// Start a document for a tree of the given depth.
    pub fn create(path: &Path, config: &VisualConfig, depth: u32) -> Result<Self, RenderError> {
        let (width, height) = config.window_size(depth);
        let mut file = AtomicFile::create(path)?;

        writeln!(file, "%!PS-Adobe-3.0 EPSF-3.0")?;
        writeln!(file, "%%BoundingBox: 0 0 {width} {height}")?;
        writeln!(file, "%%Title: {}", title(path))?;
        writeln!(file, "%%Creator: diskring")?;
        writeln!(file, "%%EndComments")?;

        writeln!(file, "{} setrgbcolor", ps_color(config.background_color))?;
        writeln!(file, "0 0 {width} {height} rectfill")?;
        writeln!(file, "{:.3} {:.3} translate", f64::from(width) / 2.0, f64::from(height) / 2.0)?;
        writeln!(file, "{:.3} setlinewidth 1 setlinejoin", config.line_width)?;

        Ok(Self {
            file,
            fill: Rgb::BLACK,
            line_color: config.line_color,
            line_width: config.line_width,
        })
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl DrawSink for PostScriptSink {
    fn set_fill_color(&mut self, color: Rgb) -> Result<(), RenderError> {
        self.fill = color;
        Ok(())
    }

    fn draw_arc_segment(&mut self, segment: &Segment) -> Result<(), RenderError> {
        let points = arc_polygon(segment);
        let Some(((x0, y0), rest)) = points.split_first() else {
            return Ok(());
        };

        writeln!(self.file, "newpath {x0:.3} {y0:.3} moveto")?;
        for (x, y) in rest {
            writeln!(self.file, "{x:.3} {y:.3} lineto")?;
        }
        writeln!(self.file, "closepath")?;
        writeln!(self.file, "gsave {} setrgbcolor fill grestore", ps_color(self.fill))?;

        if self.line_width > 0.0 {
            writeln!(self.file, "{} setrgbcolor stroke", ps_color(self.line_color))?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        writeln!(self.file, "showpage\n%%EOF")?;
        self.file.commit()
    }
}

fn ps_color(color: Rgb) -> String {
    format!("{:.4} {:.4} {:.4}", color.r, color.g, color.b)
}

/// Document title; parentheses and backslashes are dropped so the DSC
/// comment stays a single token sequence.
fn title(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().replace(['(', ')', '\\'], ""))
        .unwrap_or_else(|| "diskring".to_string())
}
