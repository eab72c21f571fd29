//! Scan and visualization configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ConfigError;

/// Smallest auto-computed window edge, in drawing units.
pub const MIN_WINDOW_SIZE: u32 = 120;

/// Largest accepted arc quality.
pub const MAX_QUALITY: u32 = 1000;

/// Where the finished drawing goes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    /// Interactive terminal display.
    #[default]
    Display,
    /// Vector graphics file.
    File(PathBuf),
}

impl OutputTarget {
    /// Output file path, if any.
    pub fn file(&self) -> Option<&Path> {
        match self {
            OutputTarget::Display => None,
            OutputTarget::File(path) => Some(path),
        }
    }
}

/// Configuration for the radial layout and its drawing sinks.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "ConfigError"))]
#[serde(default)]
pub struct VisualConfig {
    /// Radial thickness of one ring.
    #[builder(default = "20.0")]
    pub unit_scale: f64,

    /// Arc smoothness: edges per fifth of a turn.
    #[builder(default = "10")]
    pub quality: u32,

    /// Outline width.
    #[builder(default = "1.0")]
    pub line_width: f64,

    /// Canvas background.
    #[builder(default = "Rgb::WHITE")]
    pub background_color: Rgb,

    /// Outline color.
    #[builder(default = "Rgb::BLACK")]
    pub line_color: Rgb,

    /// Window/page width (0 = derived from tree depth).
    #[builder(default = "0")]
    pub window_width: u32,

    /// Window/page height (0 = same as width).
    #[builder(default = "0")]
    pub window_height: u32,

    /// Display or file output.
    #[builder(default)]
    pub output: OutputTarget,
}

impl VisualConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(scale) = self.unit_scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(format!("unit scale must be positive, got {scale}"));
            }
        }
        match self.quality {
            Some(0) => return Err("quality must be at least 1".to_string()),
            Some(q) if q > MAX_QUALITY => {
                return Err(format!("quality must be at most {MAX_QUALITY}, got {q}"));
            }
            _ => {}
        }
        if let Some(width) = self.line_width {
            if !(width.is_finite() && width >= 0.0) {
                return Err(format!("line width must not be negative, got {width}"));
            }
        }
        for (label, color) in [
            ("background", self.background_color),
            ("line", self.line_color),
        ] {
            if color.is_some_and(|c| !c.is_valid()) {
                return Err(format!("{label} color components must be within 0.0-1.0"));
            }
        }
        Ok(())
    }
}

impl VisualConfig {
    /// Create a new visual config builder.
    pub fn builder() -> VisualConfigBuilder {
        VisualConfigBuilder::default()
    }

    /// Check a config that did not come from the builder (e.g. deserialized).
    pub fn validate(&self) -> Result<(), ConfigError> {
        VisualConfigBuilder {
            unit_scale: Some(self.unit_scale),
            quality: Some(self.quality),
            line_width: Some(self.line_width),
            background_color: Some(self.background_color),
            line_color: Some(self.line_color),
            window_width: Some(self.window_width),
            window_height: Some(self.window_height),
            output: Some(self.output.clone()),
        }
        .validate()
        .map_err(ConfigError::from)
    }

    /// Window size for a tree of the given depth.
    ///
    /// An unset width fits every ring plus one ring of margin; an unset
    /// height matches the width.
    pub fn window_size(&self, depth: u32) -> (u32, u32) {
        let width = match self.window_width {
            0 => {
                let fitted = (f64::from(depth) + 1.0) * self.unit_scale * 2.0;
                (fitted.ceil() as u32).max(MIN_WINDOW_SIZE)
            }
            w => w,
        };
        let height = match self.window_height {
            0 => width,
            h => h,
        };
        (width, height)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            unit_scale: 20.0,
            quality: 10,
            line_width: 1.0,
            background_color: Rgb::WHITE,
            line_color: Rgb::BLACK,
            window_width: 0,
            window_height: 0,
            output: OutputTarget::Display,
        }
    }
}

/// Configuration for aggregating a directory tree.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "ConfigError"))]
pub struct ScanConfig {
    /// Root path to aggregate.
    pub root: PathBuf,

    /// Report target sizes for symlinked files. Symlinked directories are
    /// never descended.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Include entries whose name starts with a dot.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Glob patterns matched against entry names.
    #[builder(default)]
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                Err("Root path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Root path is required".to_string()),
        }
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a default config for the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
            include_hidden: true,
            ignore_patterns: Vec::new(),
        }
    }

    /// Check if hidden entries should be skipped.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}
