//! File output for diskring.
//!
//! Provides [`DrawSink`] implementations that write the sunburst to disk.
//! Output goes to a temporary file beside the destination and is renamed
//! into place only when the sink is finalized, so a failed render never
//! leaves a truncated image behind.

mod atomic;
mod postscript;
mod svg;

use std::path::Path;

use diskring_core::{RenderError, VisualConfig};
use diskring_layout::DrawSink;

pub use postscript::PostScriptSink;
pub use svg::SvgSink;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Encapsulated PostScript.
    PostScript,
    /// Scalable Vector Graphics.
    Svg,
}

impl ExportFormat {
    /// Pick a format from the file extension. Anything other than `.svg`
    /// is written as PostScript.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::PostScript,
        }
    }
}

/// Open the sink matching `path`'s extension.
pub fn file_sink(
    path: &Path,
    config: &VisualConfig,
    depth: u32,
) -> Result<Box<dyn DrawSink>, RenderError> {
    let format = ExportFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "opening file sink");

    Ok(match format {
        ExportFormat::PostScript => Box::new(PostScriptSink::create(path, config, depth)?),
        ExportFormat::Svg => Box::new(SvgSink::create(path, config, depth)?),
    })
}
