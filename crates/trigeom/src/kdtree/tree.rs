//! KD tree container and construction.

use std::io::{self, Write};

use log::{debug, trace};

use crate::boundbox::{Axis, BoundBox};
use crate::tolerance::{Scalar, Tolerance};
use crate::triangle::Triangle;

use super::container::{Container, Nodes};
use super::node::KdNode;
use super::split::{MedianSplit, SplitStrategy};
use super::visitor::KdVisitor;
use super::Index;

/// Build limits for a [`KdTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdTreeConfig {
    /// A node with at most this many triangles becomes a leaf.
    pub leaf_size: usize,
    /// Nodes at this depth (root = 0) become leaves regardless of size.
    pub max_depth: usize,
}

impl Default for KdTreeConfig {
    fn default() -> Self {
        Self {
            leaf_size: 8,
            max_depth: 32,
        }
    }
}

/// A static KD tree over a set of triangles.
///
/// The tree owns the triangles once, in input order; nodes refer to them by
/// [`Index`]. It is built in one batch and is read-only afterwards, so it
/// can be shared between threads once built.
///
/// Triangle boxes are grown by the [`Tolerance`] threshold current at build
/// time, which the tree records as [`KdTree::threshold`]. The
/// [`broad_phase`](crate::broad_phase) queries switch to it for their
/// duration; callers of the side predicates should do the same.
///
/// # Construction
///
/// Each node is split on the axis chosen by a [`SplitStrategy`]
/// ([`MedianSplit`] by default). A triangle goes left if its bounding box
/// ends at or before the separator, right if it starts at or after it, and
/// to both children if it straddles it:
///
/// ```
/// use trigeom::{KdTree, Triangle, Vec3};
///
/// let triangles = vec![
///     Triangle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
///     Triangle::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0), Vec3::new(5.0, 1.0, 0.0)),
/// ];
/// let tree = KdTree::build(triangles);
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct KdTree<T: Scalar> {
    triangles: Vec<Triangle<T>>,
    root: Option<KdNode<T>>,
    config: KdTreeConfig,
    threshold: T,
}

impl<T: Scalar> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> KdTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            root: None,
            config: KdTreeConfig::default(),
            threshold: Tolerance::<T>::get(),
        }
    }

    /// Builds a tree with the default configuration and [`MedianSplit`].
    pub fn build(triangles: Vec<Triangle<T>>) -> Self {
        Self::build_with(triangles, KdTreeConfig::default(), &MedianSplit)
    }

    /// Builds a tree with explicit limits and split strategy.
    ///
    /// Returns an empty tree if the input is empty.
    pub fn build_with<S: SplitStrategy<T>>(
        triangles: Vec<Triangle<T>>,
        config: KdTreeConfig,
        strategy: &S,
    ) -> Self {
        let boxes: Vec<BoundBox<T>> = triangles.iter().map(Triangle::bound_box).collect();
        let indices: Vec<Index> = (0..triangles.len()).collect();
        let root = build_node(&triangles, &boxes, indices, 0, &config, strategy);

        let tree = Self {
            triangles,
            root,
            config,
            threshold: Tolerance::<T>::get(),
        };
        debug!(
            "built kd-tree: {} triangles, {} nodes, {} leaves, depth {}",
            tree.len(),
            tree.node_count(),
            tree.leaf_count(),
            tree.depth()
        );
        tree
    }

    /// Number of triangles in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// All triangles, in input order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<T>] {
        &self.triangles
    }

    /// Triangle at `index`, if in range.
    #[inline]
    pub fn triangle(&self, index: Index) -> Option<&Triangle<T>> {
        self.triangles.get(index)
    }

    /// Threshold in force when the tree was built. Triangle boxes were
    /// inflated by it, so routing and pair tests against this tree should
    /// run under the same value (see [`Tolerance::scoped`]).
    #[inline]
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Limits the tree was built with.
    #[inline]
    pub fn config(&self) -> &KdTreeConfig {
        &self.config
    }

    /// Number of levels (0 for an empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, KdNode::depth)
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, KdNode::node_count)
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, KdNode::leaf_count)
    }

    /// View of the root node, `None` for an empty tree.
    pub fn root(&self) -> Option<Container<'_, T>> {
        self.root.as_ref().map(|node| Container::new(self, node))
    }

    /// Breadth-first iterator over every node.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self, self.root.as_ref())
    }

    /// Leaves in breadth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = Container<'_, T>> {
        self.nodes().filter(Container::is_leaf)
    }

    /// Visits every leaf depth-first, left before right.
    pub fn visit_leaves<V: KdVisitor<T>>(&self, visitor: &mut V) {
        if let Some(root) = self.root() {
            visit_leaves_node(root, visitor);
        }
    }

    /// `tri`'s bounding box lies entirely at or after `separator` on `axis`
    /// and does not also end at or before it.
    pub fn is_on_pos_side(axis: Axis, separator: T, tri: &Triangle<T>) -> bool {
        !Self::is_on_neg_side(axis, separator, tri)
            && tri
                .bound_box()
                .min(axis)
                .is_ok_and(|min| min >= separator)
    }

    /// `tri`'s bounding box ends at or before `separator` on `axis`.
    ///
    /// Boxes are grown by the current threshold, so the result is only
    /// consistent with the partition under [`KdTree::threshold`].
    pub fn is_on_neg_side(axis: Axis, separator: T, tri: &Triangle<T>) -> bool {
        tri.bound_box()
            .max(axis)
            .is_ok_and(|max| max <= separator)
    }

    /// Writes the tree as a Graphviz digraph.
    pub fn dump_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph kdtree {{")?;
        if let Some(root) = &self.root {
            let mut next_id = 0;
            dump_node(root, &mut next_id, out)?;
        }
        writeln!(out, "}}")
    }
}

/// Recursively builds the subtree for `indices`.
fn build_node<T: Scalar, S: SplitStrategy<T>>(
    triangles: &[Triangle<T>],
    boxes: &[BoundBox<T>],
    indices: Vec<Index>,
    depth: usize,
    config: &KdTreeConfig,
    strategy: &S,
) -> Option<KdNode<T>> {
    let (&first, rest) = indices.split_first()?;
    let bound_box = rest
        .iter()
        .fold(boxes[first], |acc, &i| acc.union(&boxes[i]));

    if indices.len() <= config.leaf_size || depth >= config.max_depth {
        return Some(KdNode::leaf(bound_box, indices));
    }

    let Some((axis, separator)) = strategy.choose(triangles, &indices, &bound_box) else {
        return Some(KdNode::leaf(bound_box, indices));
    };

    let Ok(k) = axis.index() else {
        return Some(KdNode::leaf(bound_box, indices));
    };

    let mut left = Vec::new();
    let mut right = Vec::new();
    for &i in &indices {
        let min = boxes[i].min_corner()[k];
        let max = boxes[i].max_corner()[k];
        if max <= separator {
            left.push(i);
        } else if min >= separator {
            right.push(i);
        } else {
            left.push(i);
            right.push(i);
        }
    }

    // A child holding every triangle would be rebuilt identically.
    if left.len() == indices.len() || right.len() == indices.len() {
        trace!(
            "no progress splitting {} triangles at {axis} = {separator}, depth {depth}",
            indices.len()
        );
        return Some(KdNode::leaf(bound_box, indices));
    }

    trace!(
        "split {} triangles at {axis} = {separator}: {} left, {} right",
        indices.len(),
        left.len(),
        right.len()
    );
    let left = build_node(triangles, boxes, left, depth + 1, config, strategy)?;
    let right = build_node(triangles, boxes, right, depth + 1, config, strategy)?;
    Some(KdNode::internal(bound_box, axis, separator, left, right))
}

fn visit_leaves_node<T: Scalar, V: KdVisitor<T>>(node: Container<'_, T>, visitor: &mut V) {
    match (node.left(), node.right()) {
        (Some(left), Some(right)) => {
            visit_leaves_node(left, visitor);
            visit_leaves_node(right, visitor);
        }
        _ => visitor.visit(node),
    }
}

/// Writes `node` and its subtree; returns the id given to `node`.
fn dump_node<T: Scalar, W: Write>(
    node: &KdNode<T>,
    next_id: &mut usize,
    out: &mut W,
) -> io::Result<usize> {
    let id = *next_id;
    *next_id += 1;

    match (node.left(), node.right(), node.separator()) {
        (Some(left), Some(right), Some(separator)) => {
            writeln!(out, "  n{id} [label=\"{} = {separator}\"];", node.axis())?;
            let left_id = dump_node(left, next_id, out)?;
            let right_id = dump_node(right, next_id, out)?;
            writeln!(out, "  n{id} -> n{left_id} [label=\"neg\"];")?;
            writeln!(out, "  n{id} -> n{right_id} [label=\"pos\"];")?;
        }
        _ => {
            let indices: Vec<String> = node.indices().iter().map(ToString::to_string).collect();
            writeln!(out, "  n{id} [shape=box, label=\"{}\"];", indices.join(" "))?;
        }
    }
    Ok(id)
}
