use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use diskring_scan::{
    Aggregator, DirNode, Entry, Listing, ScanConfig, Traversal, TraversalError, WarningKind,
    aggregate,
};
use tempfile::TempDir;

/// In-memory traversal with injectable listing failures.
#[derive(Default)]
struct MockTraversal {
    dirs: HashMap<PathBuf, Result<(Vec<Entry>, Vec<io::ErrorKind>), io::ErrorKind>>,
    files: Vec<PathBuf>,
}

impl MockTraversal {
    fn dir(self, path: &str, entries: Vec<Entry>) -> Self {
        self.dir_with_unreadable(path, entries, vec![])
    }

    fn dir_with_unreadable(
        mut self,
        path: &str,
        entries: Vec<Entry>,
        unreadable: Vec<io::ErrorKind>,
    ) -> Self {
        self.dirs.insert(PathBuf::from(path), Ok((entries, unreadable)));
        self
    }

    fn failing_dir(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.dirs.insert(PathBuf::from(path), Err(kind));
        self
    }

    fn file(mut self, path: &str) -> Self {
        self.files.push(PathBuf::from(path));
        self
    }
}

impl Traversal for MockTraversal {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains_key(path) || self.files.iter().any(|f| f == path)
    }

    fn exists_and_is_dir(&self, path: &Path) -> bool {
        self.dirs.contains_key(path)
    }

    fn list_entries(&self, path: &Path) -> io::Result<Listing> {
        match self.dirs.get(path) {
            Some(Ok((entries, unreadable))) => Ok(Listing {
                entries: entries.clone(),
                unreadable: unreadable
                    .iter()
                    .map(|kind| io::Error::new(*kind, "injected entry"))
                    .collect(),
            }),
            Some(Err(kind)) => Err(io::Error::new(*kind, "injected")),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such directory")),
        }
    }
}

fn run(traversal: MockTraversal) -> Result<diskring_scan::DiskTree, TraversalError> {
    Aggregator::with_traversal(ScanConfig::new("/r"), traversal)
        .unwrap()
        .aggregate()
}

fn assert_sizes_consistent(node: &DirNode) {
    if node.is_dir() {
        let sum: u64 = node.children().map(DirNode::total_size).sum();
        assert_eq!(node.total_size(), sum, "mismatch at {}", node.name());
        node.children().for_each(assert_sizes_consistent);
    }
}

#[test]
fn test_two_files() {
    let root = Path::new("/r");
    let tree = run(MockTraversal::default().dir(
        "/r",
        vec![Entry::file(root, "a", Some(100)), Entry::file(root, "b", Some(300))],
    ))
    .unwrap();

    assert_eq!(tree.total_size(), 400);
    assert_eq!(tree.root.child("a").unwrap().total_size(), 100);
    assert_eq!(tree.root.child("b").unwrap().total_size(), 300);
}

#[test]
fn test_nested_directory_totals() {
    let root = Path::new("/r");
    let x = Path::new("/r/X");
    let tree = run(MockTraversal::default()
        .dir("/r", vec![Entry::directory(root, "X"), Entry::file(root, "z", Some(200))])
        .dir("/r/X", vec![Entry::file(x, "y", Some(200))]))
    .unwrap();

    assert_eq!(tree.total_size(), 400);
    let dir = tree.root.child("X").unwrap();
    assert!(dir.is_dir());
    assert_eq!(dir.total_size(), 200);
    assert_eq!(dir.child("y").unwrap().total_size(), 200);
    assert_sizes_consistent(&tree.root);
}

#[test]
fn test_only_empty_subdirectories_total_zero() {
    let root = Path::new("/r");
    let a = Path::new("/r/a");
    let tree = run(MockTraversal::default()
        .dir("/r", vec![Entry::directory(root, "a"), Entry::directory(root, "b")])
        .dir("/r/a", vec![Entry::directory(a, "inner")])
        .dir("/r/a/inner", vec![])
        .dir("/r/b", vec![]))
    .unwrap();

    assert_eq!(tree.total_size(), 0);
    assert_eq!(tree.root.child("a").unwrap().total_size(), 0);
    assert_eq!(tree.root.depth(), 3);
    assert_sizes_consistent(&tree.root);
}

#[test]
fn test_unreadable_subdirectory_counts_as_empty() {
    let root = Path::new("/r");
    let tree = run(MockTraversal::default()
        .dir(
            "/r",
            vec![Entry::directory(root, "locked"), Entry::file(root, "c", Some(50))],
        )
        .failing_dir("/r/locked", io::ErrorKind::PermissionDenied))
    .unwrap();

    assert_eq!(tree.total_size(), 50);
    let locked = tree.root.child("locked").unwrap();
    assert!(locked.is_dir());
    assert_eq!(locked.total_size(), 0);
    assert_eq!(tree.warnings.len(), 1);
    assert_eq!(tree.warnings[0].kind, WarningKind::PermissionDenied);
}

#[test]
fn test_vanished_entries_count_as_zero() {
    let root = Path::new("/r");
    let tree = run(MockTraversal::default()
        .dir(
            "/r",
            vec![
                Entry::directory(root, "gone"),
                Entry::file(root, "deleted", None),
                Entry::file(root, "kept", Some(10)),
            ],
        )
        .failing_dir("/r/gone", io::ErrorKind::NotFound))
    .unwrap();

    assert_eq!(tree.total_size(), 10);
    assert_eq!(tree.root.child("deleted").unwrap().total_size(), 0);
    let kinds: Vec<_> = tree.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, [WarningKind::Vanished, WarningKind::MetadataError]);
}

#[test]
fn test_unreadable_entries_are_reported() {
    let root = Path::new("/r");
    let sub = Path::new("/r/sub");
    let tree = run(MockTraversal::default()
        .dir_with_unreadable(
            "/r",
            vec![Entry::directory(root, "sub"), Entry::file(root, "a", Some(70))],
            vec![io::ErrorKind::Other],
        )
        .dir_with_unreadable(
            "/r/sub",
            vec![Entry::file(sub, "b", Some(30))],
            vec![io::ErrorKind::PermissionDenied, io::ErrorKind::NotFound],
        ))
    .unwrap();

    assert_eq!(tree.total_size(), 100);
    assert_eq!(tree.root.child("sub").unwrap().total_size(), 30);
    assert_sizes_consistent(&tree.root);

    let reported: Vec<_> = tree
        .warnings
        .iter()
        .map(|w| (w.path.as_path(), w.kind))
        .collect();
    assert_eq!(
        reported,
        [
            (root, WarningKind::ReadError),
            (sub, WarningKind::PermissionDenied),
            (sub, WarningKind::Vanished),
        ]
    );
}

#[test]
fn test_root_errors() {
    let err = run(MockTraversal::default()).unwrap_err();
    assert!(matches!(err, TraversalError::NotFound { .. }));

    let err = run(MockTraversal::default().file("/r")).unwrap_err();
    assert!(matches!(err, TraversalError::NotADirectory { .. }));

    let err = run(MockTraversal::default().failing_dir("/r", io::ErrorKind::PermissionDenied))
        .unwrap_err();
    assert!(matches!(err, TraversalError::PermissionDenied { .. }));
}

#[test]
fn test_child_order_follows_traversal() {
    let root = Path::new("/r");
    let tree = run(MockTraversal::default().dir(
        "/r",
        vec![
            Entry::file(root, "zeta", Some(1)),
            Entry::file(root, "alpha", Some(2)),
            Entry::file(root, "mid", Some(3)),
        ],
    ))
    .unwrap();

    let names: Vec<_> = tree.root.children().map(DirNode::name).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_filesystem_aggregation_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("docs/drafts")).unwrap();
    fs::create_dir(root.join("empty")).unwrap();
    fs::write(root.join("docs/readme.md"), vec![b'x'; 1000]).unwrap();
    fs::write(root.join("docs/drafts/one.txt"), vec![b'y'; 250]).unwrap();
    fs::write(root.join("top.bin"), vec![0u8; 4096]).unwrap();

    let first = aggregate(root).unwrap();
    let second = aggregate(root).unwrap();

    assert_eq!(first.root, second.root);
    assert_eq!(first.total_size(), 1000 + 250 + 4096);
    assert_eq!(first.root.child("empty").unwrap().total_size(), 0);
    assert_sizes_consistent(&first.root);
}
