//! Post-order directory size aggregation.

use std::path::Path;
use std::time::Instant;

use compact_str::CompactString;
use globset::{Glob, GlobSet, GlobSetBuilder};

use diskring_core::{
    ConfigError, DirNode, DiskTree, ScanConfig, ScanWarning, TraversalError, TreeStats,
};

use crate::traversal::{EntryKind, FsTraversal, Listing, Traversal};

/// Builds a size-annotated [`DirNode`] tree from a directory root.
///
/// Every directory's total is computed right after all of its children are
/// finished, so no size is ever read before it is final.
pub struct Aggregator<T = FsTraversal> {
    traversal: T,
    config: ScanConfig,
    ignore: GlobSet,
}

/// Mutable bookkeeping for one walk.
#[derive(Default)]
struct Walk {
    stats: TreeStats,
    warnings: Vec<ScanWarning>,
}

impl Aggregator<FsTraversal> {
    /// Create an aggregator over the real filesystem.
    pub fn new(config: ScanConfig) -> Result<Self, ConfigError> {
        let traversal = FsTraversal::new().follow_symlinks(config.follow_symlinks);
        Self::with_traversal(config, traversal)
    }
}

impl<T: Traversal> Aggregator<T> {
    /// Create an aggregator over a custom traversal.
    pub fn with_traversal(config: ScanConfig, traversal: T) -> Result<Self, ConfigError> {
        let ignore = build_ignore_set(&config.ignore_patterns)?;
        Ok(Self {
            traversal,
            config,
            ignore,
        })
    }

    /// Aggregate the configured root.
    pub fn aggregate(&self) -> Result<DiskTree, TraversalError> {
        let start = Instant::now();
        let root_path = self.config.root.as_path();

        if !self.traversal.exists(root_path) {
            return Err(TraversalError::NotFound {
                path: root_path.to_path_buf(),
            });
        }
        if !self.traversal.exists_and_is_dir(root_path) {
            return Err(TraversalError::NotADirectory {
                path: root_path.to_path_buf(),
            });
        }

        // Unlike nested directories, an unreadable root leaves nothing to draw.
        let listing = self
            .traversal
            .list_entries(root_path)
            .map_err(|e| TraversalError::io(root_path, e))?;

        let mut walk = Walk::default();
        let children = self.aggregate_listing(root_path, listing, 0, &mut walk);
        let root = DirNode::directory(root_name(root_path), children);

        tracing::debug!(
            path = %root_path.display(),
            total_size = root.total_size(),
            files = walk.stats.total_files,
            dirs = walk.stats.total_dirs,
            warnings = walk.warnings.len(),
            "aggregation finished"
        );

        Ok(DiskTree::new(
            root,
            root_path.to_path_buf(),
            walk.stats,
            start.elapsed(),
            walk.warnings,
        ))
    }

    /// Recursively aggregate one directory below the root.
    fn aggregate_dir(
        &self,
        path: &Path,
        name: CompactString,
        depth: u32,
        walk: &mut Walk,
    ) -> DirNode {
        let listing = match self.traversal.list_entries(path) {
            Ok(listing) => listing,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "counting unreadable directory as empty"
                );
                walk.warnings.push(ScanWarning::unreadable_dir(path, &err));
                return DirNode::empty_directory(name);
            }
        };

        let children = self.aggregate_listing(path, listing, depth, walk);
        let node = DirNode::directory(name, children);
        tracing::trace!(
            path = %path.display(),
            size = node.total_size(),
            "directory aggregated"
        );
        node
    }

    /// Turn the listing of the directory `path` at `depth` into finished
    /// child nodes.
    fn aggregate_listing(
        &self,
        path: &Path,
        listing: Listing,
        depth: u32,
        walk: &mut Walk,
    ) -> Vec<DirNode> {
        for err in &listing.unreadable {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "skipping unreadable directory entry"
            );
            walk.warnings.push(ScanWarning::unreadable_entry(path, err));
        }

        let mut children = Vec::with_capacity(listing.entries.len());

        for entry in listing.entries {
            if self.is_excluded(&entry.name) {
                continue;
            }

            match entry.kind {
                EntryKind::Directory => {
                    walk.stats.record_dir(depth + 1);
                    children.push(self.aggregate_dir(&entry.path, entry.name, depth + 1, walk));
                }
                EntryKind::File { size } => {
                    let size = size.unwrap_or_else(|| {
                        tracing::warn!(
                            path = %entry.path.display(),
                            "counting file with unreadable size as 0 bytes"
                        );
                        walk.warnings.push(ScanWarning::missing_size(&entry.path));
                        0
                    });
                    walk.stats.record_file(size);
                    children.push(DirNode::file(entry.name, size));
                }
            }
        }

        children
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.config.should_skip_hidden(name) || self.ignore.is_match(name)
    }
}

/// Aggregate `root` over the real filesystem with default options.
pub fn aggregate(root: impl AsRef<Path>) -> Result<DiskTree, TraversalError> {
    let aggregator = Aggregator {
        traversal: FsTraversal::new(),
        config: ScanConfig::new(root.as_ref()),
        ignore: GlobSet::empty(),
    };
    aggregator.aggregate()
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| ConfigError::Invalid(format!("bad ignore pattern '{pattern}': {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| ConfigError::Invalid(format!("bad ignore patterns: {e}")))
}

fn root_name(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(path.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world world world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();
        fs::write(root.join("dir2/file4.txt"), "another file here").unwrap();
        fs::write(root.join(".hidden"), "secret").unwrap();

        temp
    }

    #[test]
    fn test_basic_aggregate() {
        let temp = create_test_tree();
        let tree = aggregate(temp.path()).unwrap();

        assert_eq!(tree.stats.total_files, 5);
        assert_eq!(tree.stats.total_dirs, 3);
        assert_eq!(tree.stats.max_depth, 2);
        assert_eq!(tree.total_size(), 5 + 17 + 4 + 17 + 6);
        assert!(tree.root.is_consistent());
        assert!(!tree.has_warnings());

        let dir1 = tree.root.child("dir1").unwrap();
        assert_eq!(dir1.total_size(), 21);
        assert_eq!(dir1.child("subdir").unwrap().total_size(), 4);
    }

    #[test]
    fn test_skip_hidden_and_ignore() {
        let temp = create_test_tree();
        let config = ScanConfig::builder()
            .root(temp.path())
            .include_hidden(false)
            .ignore_patterns(vec!["dir2".to_string(), "*.md".to_string()])
            .build()
            .unwrap();

        let tree = Aggregator::new(config).unwrap().aggregate().unwrap();

        assert!(tree.root.child(".hidden").is_none());
        assert!(tree.root.child("dir2").is_none());
        assert_eq!(tree.total_size(), 5 + 17 + 4);
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let config = ScanConfig::builder()
            .root("/tmp")
            .ignore_patterns(vec!["[".to_string()])
            .build()
            .unwrap();
        assert!(Aggregator::new(config).is_err());
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = aggregate(temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, TraversalError::NotFound { .. }));
    }

    #[test]
    fn test_root_is_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain");
        fs::write(&file, "x").unwrap();

        let err = aggregate(&file).unwrap_err();
        assert!(matches!(err, TraversalError::NotADirectory { .. }));
    }
}
