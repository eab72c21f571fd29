//! Recursive radial layout, driven by an explicit stack.

use compact_str::CompactString;
use diskring_core::{DirNode, VisualConfig};

use crate::color::segment_color;
use crate::segment::Segment;
use crate::tessellate::edge_count;

/// Lay out `root` as a lazy sequence of ring segments.
///
/// Segments come out in pre-order: each directory's arc is followed by the
/// arcs of its contents before its next sibling. Entries of zero size are
/// skipped together with their subtrees, so an empty root yields nothing.
/// Call again (or clone the iterator) to restart.
pub fn layout<'a>(root: &'a DirNode, config: &VisualConfig) -> SegmentIter<'a> {
    SegmentIter::new(root, config)
}

/// Layout position of one directory whose children are being emitted.
#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    node: &'a DirNode,
    /// Index of the next child to emit.
    next: usize,
    /// Ring the children are drawn in.
    level: u32,
    /// Angular width of `node`'s own arc.
    inherited_fraction: f64,
    /// Start of the next child's arc.
    cursor: f64,
}

/// Iterator over the segments of a sunburst. See [`layout`].
#[derive(Debug, Clone)]
pub struct SegmentIter<'a> {
    stack: Vec<Frame<'a>>,
    depth: u32,
    unit_scale: f64,
    quality: u32,
}

impl<'a> SegmentIter<'a> {
    fn new(root: &'a DirNode, config: &VisualConfig) -> Self {
        let mut stack = Vec::new();
        if root.total_size() > 0 {
            stack.push(Frame {
                node: root,
                next: 0,
                level: 1,
                inherited_fraction: 1.0,
                cursor: 0.0,
            });
        }

        Self {
            stack,
            depth: root.depth(),
            unit_scale: config.unit_scale,
            quality: config.quality,
        }
    }

    /// Height of the tree being laid out (outermost possible ring).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn segment(&self, node: &DirNode, level: u32, angle_start: f64, angle_fraction: f64) -> Segment {
        let inner_radius = f64::from(level) * self.unit_scale;
        Segment {
            name: CompactString::new(node.name()),
            size: node.total_size(),
            ring_level: level,
            angle_start,
            angle_fraction,
            color: segment_color(level, self.depth, angle_start, angle_fraction),
            inner_radius,
            outer_radius: inner_radius + self.unit_scale,
            edge_count: edge_count(angle_fraction, self.quality),
        }
    }
}

impl Iterator for SegmentIter<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(child) = frame.node.child_at(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            // Frames are only pushed for nodes with a nonzero total, so the
            // division below is always defined.
            let size = child.total_size();
            if size == 0 {
                continue;
            }

            let angle_fraction =
                size as f64 / frame.node.total_size() as f64 * frame.inherited_fraction;
            let angle_start = frame.cursor;
            let level = frame.level;
            frame.cursor += angle_fraction;

            if child.is_dir() && child.child_count() > 0 {
                self.stack.push(Frame {
                    node: child,
                    next: 0,
                    level: level + 1,
                    inherited_fraction: angle_fraction,
                    cursor: angle_start,
                });
            }

            return Some(self.segment(child, level, angle_start, angle_fraction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_two_files_split_the_circle() {
        let root = DirNode::directory("root", [DirNode::file("a", 100), DirNode::file("b", 300)]);
        let segments: Vec<_> = layout(&root, &VisualConfig::default()).collect();

        assert_eq!(segments.len(), 2);
        let (a, b) = (&segments[0], &segments[1]);
        assert_eq!(a.name.as_str(), "a");
        assert!(close(a.angle_start, 0.0));
        assert!(close(a.angle_fraction, 0.25));
        assert!(close(b.angle_fraction, 0.75));
        assert!(close(b.angle_start, a.angle_start + 0.25));
        assert_eq!(a.ring_level, 1);
    }

    #[test]
    fn test_radii_follow_ring_level() {
        let root = DirNode::directory(
            "root",
            [DirNode::directory("x", [DirNode::file("y", 10)])],
        );
        let config = VisualConfig::builder().unit_scale(15.0).build().unwrap();
        let segments: Vec<_> = layout(&root, &config).collect();

        assert_eq!(segments[0].inner_radius, 15.0);
        assert_eq!(segments[0].outer_radius, 30.0);
        assert_eq!(segments[1].inner_radius, 30.0);
        assert_eq!(segments[1].outer_radius, 45.0);
    }

    #[test]
    fn test_zero_root_yields_nothing() {
        let root = DirNode::directory("root", [DirNode::empty_directory("e")]);
        assert_eq!(layout(&root, &VisualConfig::default()).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let root = DirNode::directory("root", [DirNode::file("a", 1), DirNode::file("b", 2)]);
        let config = VisualConfig::default();
        let iter = layout(&root, &config);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first, layout(&root, &config).collect::<Vec<_>>());
    }
}
