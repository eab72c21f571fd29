//! Directory size aggregation for diskring.
//!
//! This crate walks a directory root and builds the size-annotated
//! [`DirNode`] tree consumed by the radial layout engine.
//!
//! # Overview
//!
//! - **Post-order aggregation**: a directory's total is computed only after
//!   every child is finished
//! - **Partial-failure tolerance**: unreadable entries count as zero bytes
//!   and are reported as [`ScanWarning`]s
//! - **Pluggable traversal**: the [`Traversal`] trait hides the filesystem
//!
//! # Example
//!
//! ```rust,no_run
//! use diskring_scan::{Aggregator, ScanConfig};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let tree = Aggregator::new(config).unwrap().aggregate().unwrap();
//!
//! println!("Total size: {} bytes", tree.total_size());
//! println!("Total files: {}", tree.stats.total_files);
//! ```

mod aggregator;
mod traversal;

pub use aggregator::{Aggregator, aggregate};
pub use traversal::{Entry, EntryKind, FsTraversal, Listing, Traversal};

// Re-export core types for convenience
pub use diskring_core::{
    DirNode, DiskTree, NodeKind, ScanConfig, ScanWarning, TraversalError, TreeStats, WarningKind,
};
