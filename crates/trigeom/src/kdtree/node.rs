//! KD tree node implementation.

use crate::boundbox::{Axis, BoundBox};
use crate::tolerance::Scalar;

use super::Index;

/// A node of the [`KdTree`](super::KdTree).
///
/// Leaves hold the indices of their triangles. Internal nodes hold no
/// indices; they split space at `separator` along `axis`. A triangle whose
/// bounding box straddles the separator is listed in both subtrees.
///
/// Every node's bounding box is the union of its triangles' boxes, so a
/// child's box always lies inside its parent's.
#[derive(Debug, Clone)]
pub struct KdNode<T: Scalar> {
    bound_box: BoundBox<T>,
    indices: Vec<Index>,
    split: Option<Split<T>>,
}

#[derive(Debug, Clone)]
struct Split<T: Scalar> {
    axis: Axis,
    separator: T,
    left: Box<KdNode<T>>,
    right: Box<KdNode<T>>,
}

impl<T: Scalar> KdNode<T> {
    /// Creates a leaf holding `indices`.
    pub fn leaf(bound_box: BoundBox<T>, indices: Vec<Index>) -> Self {
        Self {
            bound_box,
            indices,
            split: None,
        }
    }

    /// An internal node. `left` covers the negative side of the separator.
    pub fn internal(
        bound_box: BoundBox<T>,
        axis: Axis,
        separator: T,
        left: KdNode<T>,
        right: KdNode<T>,
    ) -> Self {
        Self {
            bound_box,
            indices: Vec::new(),
            split: Some(Split {
                axis,
                separator,
                left: Box::new(left),
                right: Box::new(right),
            }),
        }
    }

    /// Box enclosing every triangle below this node.
    #[inline]
    pub fn bound_box(&self) -> &BoundBox<T> {
        &self.bound_box
    }

    /// Triangle indices stored at this node; empty for internal nodes.
    #[inline]
    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.split.is_none()
    }

    /// Split axis, [`Axis::None`] at a leaf.
    pub fn axis(&self) -> Axis {
        self.split.as_ref().map_or(Axis::None, |s| s.axis)
    }

    /// Split coordinate, `None` at a leaf.
    pub fn separator(&self) -> Option<T> {
        self.split.as_ref().map(|s| s.separator)
    }

    /// Child on the negative side of the separator.
    pub fn left(&self) -> Option<&KdNode<T>> {
        self.split.as_ref().map(|s| s.left.as_ref())
    }

    /// Child on the positive side of the separator.
    pub fn right(&self) -> Option<&KdNode<T>> {
        self.split.as_ref().map(|s| s.right.as_ref())
    }

    /// Depth of the subtree rooted here (1 for a leaf).
    pub fn depth(&self) -> usize {
        match &self.split {
            None => 1,
            Some(s) => 1 + s.left.depth().max(s.right.depth()),
        }
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        match &self.split {
            None => 1,
            Some(s) => 1 + s.left.node_count() + s.right.node_count(),
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match &self.split {
            None => 1,
            Some(s) => s.left.leaf_count() + s.right.leaf_count(),
        }
    }
}
