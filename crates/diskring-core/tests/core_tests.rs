use std::path::{Path, PathBuf};
use std::time::Duration;

use diskring_core::{
    ConfigError, DirNode, DiskTree, MIN_WINDOW_SIZE, NodeKind, OutputTarget, Rgb, ScanConfig,
    ScanWarning, TreeStats, VisualConfig, WarningKind,
};

fn sample_tree() -> DirNode {
    DirNode::directory(
        "root",
        [
            DirNode::directory(
                "src",
                [
                    DirNode::file("main.rs", 1200),
                    DirNode::directory("bin", [DirNode::file("tool.rs", 300)]),
                ],
            ),
            DirNode::empty_directory("empty"),
            DirNode::file("README", 500),
        ],
    )
}

#[test]
fn test_directory_totals_are_child_sums() {
    let root = sample_tree();

    assert_eq!(root.total_size(), 2000);
    assert_eq!(root.child("src").unwrap().total_size(), 1500);
    assert_eq!(root.child("empty").unwrap().total_size(), 0);
    assert!(root.is_consistent());
}

#[test]
fn test_tree_shape_queries() {
    let root = sample_tree();

    assert_eq!(root.kind(), NodeKind::Directory);
    assert_eq!(root.child_count(), 3);
    assert_eq!(root.file_count(), 3);
    assert_eq!(root.dir_count(), 3);
    assert_eq!(root.depth(), 3);

    let names: Vec<_> = root.children().map(DirNode::name).collect();
    assert_eq!(names, ["src", "empty", "README"]);
    assert_eq!(root.child_at(2).map(DirNode::name), Some("README"));
    assert!(root.child_at(3).is_none());
}

#[test]
fn test_depth_of_leaves() {
    assert_eq!(DirNode::file("f", 1).depth(), 0);
    assert_eq!(DirNode::empty_directory("d").depth(), 1);
}

#[test]
fn test_disk_tree_summary() {
    let root = sample_tree();
    let mut stats = TreeStats::new();
    stats.record_file(1200);
    stats.record_file(300);
    stats.record_file(500);
    stats.record_dir(1);
    stats.record_dir(2);
    stats.record_dir(1);

    let warning = ScanWarning::new("/data/locked", "Permission denied", WarningKind::PermissionDenied);
    let tree = DiskTree::new(
        root,
        PathBuf::from("/data"),
        stats,
        Duration::from_millis(5),
        vec![warning],
    );

    assert_eq!(tree.total_size(), 2000);
    assert_eq!(tree.stats.total_size, tree.total_size());
    assert_eq!(tree.stats.total_files, 3);
    assert_eq!(tree.stats.max_depth, 2);
    assert!(tree.has_warnings());
}

#[test]
fn test_window_size() {
    let config = VisualConfig::default();
    assert_eq!(config.window_size(0), (MIN_WINDOW_SIZE, MIN_WINDOW_SIZE));
    // (5 + 1) * 20 * 2
    assert_eq!(config.window_size(5), (240, 240));

    let config = VisualConfig::builder()
        .window_width(300u32)
        .build()
        .unwrap();
    assert_eq!(config.window_size(9), (300, 300));

    let config = VisualConfig::builder()
        .window_width(300u32)
        .window_height(200u32)
        .build()
        .unwrap();
    assert_eq!(config.window_size(9), (300, 200));
}

#[test]
fn test_visual_config_validation() {
    let mut config = VisualConfig::default();
    assert!(config.validate().is_ok());

    config.line_width = -1.0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    config.line_width = 0.0;
    config.background_color = Rgb::new(-0.1, 0.0, 0.0);
    assert!(config.validate().is_err());
}

#[test]
fn test_output_target() {
    assert_eq!(OutputTarget::default().file(), None);
    let target = OutputTarget::File(PathBuf::from("out.ps"));
    assert_eq!(target.file(), Some(Path::new("out.ps")));
}

#[test]
fn test_scan_config_builder() {
    let config = ScanConfig::builder()
        .root("/data")
        .include_hidden(false)
        .ignore_patterns(vec!["*.tmp".to_string()])
        .build()
        .unwrap();

    assert_eq!(config.root, PathBuf::from("/data"));
    assert!(!config.follow_symlinks);
    assert!(config.should_skip_hidden(".cache"));
    assert!(!config.should_skip_hidden("cache"));

    assert!(matches!(
        ScanConfig::builder().build(),
        Err(ConfigError::Invalid(_))
    ));
    assert!(ScanConfig::builder().root("").build().is_err());
}
