//! Aggregated tree container and statistics.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScanWarning;
use crate::node::DirNode;

/// Summary statistics for an aggregated tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total size in bytes.
    pub total_size: u64,
    /// Total number of files.
    pub total_files: u64,
    /// Total number of directories below the root.
    pub total_dirs: u64,
    /// Deepest directory level reached (root = 0).
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file entry.
    pub fn record_file(&mut self, size: u64) {
        self.total_files += 1;
        self.total_size += size;
    }

    /// Record a directory at the given depth.
    pub fn record_dir(&mut self, depth: u32) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// A complete aggregation result.
#[derive(Debug, Clone)]
pub struct DiskTree {
    /// Root node of the tree.
    pub root: DirNode,

    /// Root path that was aggregated.
    pub root_path: PathBuf,

    /// Duration of the walk.
    pub scan_duration: Duration,

    /// Summary statistics.
    pub stats: TreeStats,

    /// Entries that were counted as zero bytes.
    pub warnings: Vec<ScanWarning>,
}

impl DiskTree {
    /// Create a new disk tree.
    pub fn new(
        root: DirNode,
        root_path: PathBuf,
        stats: TreeStats,
        scan_duration: Duration,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        Self {
            root,
            root_path,
            scan_duration,
            stats,
            warnings,
        }
    }

    /// Get the total size of the tree.
    pub fn total_size(&self) -> u64 {
        self.root.total_size()
    }

    /// Check if any entry had to be counted as zero bytes.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
