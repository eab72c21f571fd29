//! Size-annotated directory tree nodes.

use compact_str::CompactString;
use indexmap::IndexMap;

/// Type of an aggregated entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Regular file (or a symlink counted as one).
    File,
    /// Directory.
    Directory,
}

/// A single file or directory in the aggregated tree.
///
/// Directory nodes are only built from their finished children, so the
/// total size of a directory always equals the sum of its children's totals.
/// There is no mutation API: once constructed a node never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    name: CompactString,
    kind: NodeKind,
    total_size: u64,
    children: IndexMap<CompactString, DirNode>,
}

impl DirNode {
    /// Create a file node.
    pub fn file(name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            total_size: size,
            children: IndexMap::new(),
        }
    }

    /// Create a directory node from its finished children.
    ///
    /// Children keep the order in which they are yielded. A later child with
    /// the same name as an earlier one replaces it.
    pub fn directory(
        name: impl Into<CompactString>,
        children: impl IntoIterator<Item = DirNode>,
    ) -> Self {
        let children: IndexMap<CompactString, DirNode> = children
            .into_iter()
            .map(|child| (child.name.clone(), child))
            .collect();
        let total_size = children.values().map(|c| c.total_size).sum();

        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            total_size,
            children,
        }
    }

    /// Create a directory with no children.
    pub fn empty_directory(name: impl Into<CompactString>) -> Self {
        Self::directory(name, std::iter::empty())
    }

    /// Entry name (not a full path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Size in bytes; aggregate for directories.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Children in traversal order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &DirNode> {
        self.children.values()
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&DirNode> {
        self.children.get(name)
    }

    /// Child at a position in traversal order.
    pub fn child_at(&self, index: usize) -> Option<&DirNode> {
        self.children.get_index(index).map(|(_, child)| child)
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Height of the subtree.
    ///
    /// Files have depth 0, a directory is one more than its deepest child
    /// (so an empty directory has depth 1). For a root this equals the
    /// outermost ring level the layout can produce.
    pub fn depth(&self) -> u32 {
        match self.kind {
            NodeKind::File => 0,
            NodeKind::Directory => {
                1 + self.children.values().map(DirNode::depth).max().unwrap_or(0)
            }
        }
    }

    /// Number of files in this subtree (1 for a file).
    pub fn file_count(&self) -> u64 {
        match self.kind {
            NodeKind::File => 1,
            NodeKind::Directory => self.children.values().map(DirNode::file_count).sum(),
        }
    }

    /// Number of directories below this node, not counting itself.
    pub fn dir_count(&self) -> u64 {
        self.children
            .values()
            .filter(|c| c.is_dir())
            .map(|c| c.dir_count() + 1)
            .sum()
    }

    /// Verify the size invariant for every directory in the subtree.
    pub fn is_consistent(&self) -> bool {
        match self.kind {
            NodeKind::File => self.children.is_empty(),
            NodeKind::Directory => {
                let sum: u64 = self.children.values().map(|c| c.total_size).sum();
                sum == self.total_size && self.children.values().all(DirNode::is_consistent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_node() {
        let node = DirNode::file("a.txt", 100);
        assert!(node.is_file());
        assert_eq!(node.total_size(), 100);
        assert_eq!(node.depth(), 0);
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_directory_sums_children() {
        let node = DirNode::directory(
            "root",
            [DirNode::file("a", 100), DirNode::file("b", 300)],
        );
        assert!(node.is_dir());
        assert_eq!(node.total_size(), 400);
        assert_eq!(node.depth(), 1);
        assert!(node.is_consistent());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let node = DirNode::directory(
            "root",
            [DirNode::file("z", 1), DirNode::file("a", 2), DirNode::file("m", 3)],
        );
        let names: Vec<_> = node.children().map(DirNode::name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_empty_directory() {
        let node = DirNode::empty_directory("empty");
        assert_eq!(node.total_size(), 0);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.file_count(), 0);
    }

    #[test]
    fn test_counts() {
        let tree = DirNode::directory(
            "root",
            [
                DirNode::directory("x", [DirNode::file("y", 5), DirNode::empty_directory("e")]),
                DirNode::file("z", 5),
            ],
        );
        assert_eq!(tree.file_count(), 2);
        assert_eq!(tree.dir_count(), 2);
        assert_eq!(tree.depth(), 3);
    }
}
