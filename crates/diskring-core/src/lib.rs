//! Core types and configuration for diskring.
//!
//! This crate provides the data structures shared by the aggregator, the
//! radial layout engine and the drawing sinks: the size-annotated
//! [`DirNode`] tree, visual and scan configuration, colors and errors.

mod color;
mod config;
mod error;
mod node;
mod tree;

pub use color::Rgb;
pub use config::{
    MAX_QUALITY, MIN_WINDOW_SIZE, OutputTarget, ScanConfig, ScanConfigBuilder, VisualConfig,
    VisualConfigBuilder,
};
pub use error::{ConfigError, RenderError, ScanWarning, TraversalError, WarningKind};
pub use node::{DirNode, NodeKind};
pub use tree::{DiskTree, TreeStats};
