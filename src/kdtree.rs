use crate::arena::{NodeArena, NodeRef};
use crate::axis::Axis;
use crate::bounds::BoundingBox;
use crate::error::{Error, Result};
use crate::Point;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Counters collected by a single range search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the work queue.
    pub visited: usize,
    /// Points appended to the output.
    pub found: usize,
}

/// A static 3D kd-tree answering axis-aligned box queries.
///
/// The tree is built once from a fixed point set by recursive median splits, cycling the split
/// axis X, Y, Z with depth. Nodes live in a flat arena and link to their children by index.
///
/// Searching only reads the tree, so a built `KdTree` can be shared between threads and
/// queried in parallel, see [`KdTree::query_batch`].
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    nodes: NodeArena,
    height: u32,
}

impl KdTree {
    /// Builds a tree containing every point of `points` exactly once.
    ///
    /// Never fails. Points with NaN coordinates are stored but sorted as if the NaN were +inf,
    /// and no query ever returns them.
    pub fn build(mut points: Vec<Point>) -> Self {
        let mut nodes = NodeArena::with_capacity(points.len());
        let mut height = 0;
        build_recursive(&mut nodes, &mut points, 0, &mut height);

        log::debug!("built kd-tree with {} nodes, height {}", nodes.len(), height);

        KdTree { nodes, height }
    }

    /// Like [`KdTree::build`], but rejects any point with a NaN coordinate.
    pub fn try_build(points: Vec<Point>) -> Result<Self> {
        for (index, point) in points.iter().enumerate() {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                if axis.coord(point).is_nan() {
                    return Err(Error::NanCoordinate { index, axis });
                }
            }
        }
        Ok(Self::build(points))
    }

    /// Appends every stored point `p` with `min <= p <= max` (componentwise) to `out`.
    ///
    /// The order of the appended points is unspecified. If `min > max` on some axis nothing
    /// matches on that axis and the result is simply empty.
    pub fn range_search(&self, min: Point, max: Point, out: &mut Vec<Point>) {
        self.range_search_stats(min, max, out);
    }

    /// Same as [`KdTree::range_search`], also reporting how much of the tree was visited.
    pub fn range_search_stats(&self, min: Point, max: Point, out: &mut Vec<Point>) -> SearchStats {
        let bounds = BoundingBox::new(min, max);
        if !bounds.is_valid() {
            log::warn!("range search with inverted or NaN box {:?}..{:?}", min, max);
        }

        let mut stats = SearchStats::default();
        let mut queue: VecDeque<(NodeRef, u32)> = VecDeque::new();
        let root = self.nodes.root();
        if !root.is_none() {
            queue.push_back((root, 0));
        }

        while let Some((node_ref, depth)) = queue.pop_front() {
            let Some(node) = self.nodes.get(node_ref) else {
                continue;
            };
            stats.visited += 1;

            if bounds.contains(&node.point) {
                out.push(node.point);
                stats.found += 1;
            }

            // Left holds keys <= this node's key, right holds keys >= it.
            let axis = Axis::from_depth(depth);
            let key = axis.key(&node.point);
            if !node.left.is_none() && key >= min[axis.index()] {
                queue.push_back((node.left, depth + 1));
            }
            if !node.right.is_none() && key <= max[axis.index()] {
                queue.push_back((node.right, depth + 1));
            }
        }

        log::trace!("range search visited {} of {} nodes, found {}", stats.visited, self.nodes.len(), stats.found);
        stats
    }

    /// Returns all points inside `bounds`.
    pub fn query(&self, bounds: &BoundingBox<3>) -> Vec<Point> {
        let mut out = Vec::new();
        self.range_search(bounds.min, bounds.max, &mut out);
        out
    }

    /// Answers many boxes in parallel. The i-th result belongs to the i-th box.
    pub fn query_batch(&self, boxes: &[BoundingBox<3>]) -> Vec<Vec<Point>> {
        boxes.par_iter().map(|b| self.query(b)).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels, 0 for an empty tree.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stored points in construction order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.nodes.iter().map(|node| &node.point)
    }

    /// Read-only view of the node storage.
    pub fn arena(&self) -> &NodeArena {
        &self.nodes
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        KdTree::build(iter.into_iter().collect())
    }
}

fn build_recursive(nodes: &mut NodeArena, points: &mut [Point], depth: u32, height: &mut u32) -> NodeRef {
    if points.is_empty() {
        return NodeRef::NONE;
    }
    *height = (*height).max(depth + 1);

    // Median split; ties on the key may end up on either side.
    let mid = points.len() / 2;
    if points.len() > 1 {
        let axis = Axis::from_depth(depth);
        points.select_nth_unstable_by(mid, |a, b| {
            axis.key(a).partial_cmp(&axis.key(b)).unwrap_or(Ordering::Equal)
        });
    }

    let node = nodes.push(points[mid]);

    if points.len() > 1 {
        let (left, rest) = points.split_at_mut(mid);
        let left = build_recursive(nodes, left, depth + 1, height);
        let right = build_recursive(nodes, &mut rest[1..], depth + 1, height);
        nodes.link(node, left, right);
    }

    node
}
