//! Read-only views into a built KD tree.

use std::collections::VecDeque;

use crate::boundbox::{Axis, BoundBox};
use crate::tolerance::Scalar;
use crate::triangle::Triangle;

use super::{Index, KdNode, KdTree};

/// A node of a [`KdTree`] together with the tree owning its triangles.
///
/// Containers are cheap to copy and never mutate the tree, so any number of
/// them can be used side by side.
#[derive(Debug)]
pub struct Container<'a, T: Scalar> {
    tree: &'a KdTree<T>,
    node: &'a KdNode<T>,
}

impl<T: Scalar> Clone for Container<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar> Copy for Container<'_, T> {}

impl<'a, T: Scalar> Container<'a, T> {
    pub(crate) fn new(tree: &'a KdTree<T>, node: &'a KdNode<T>) -> Self {
        Self { tree, node }
    }

    /// The underlying node.
    #[inline]
    pub fn node(&self) -> &'a KdNode<T> {
        self.node
    }

    /// Union of the boxes of every triangle below this node.
    #[inline]
    pub fn bound_box(&self) -> &'a BoundBox<T> {
        self.node.bound_box()
    }

    /// Split axis, [`Axis::None`] at a leaf.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.node.axis()
    }

    /// Split coordinate on [`Container::axis`], `None` at a leaf.
    #[inline]
    pub fn separator(&self) -> Option<T> {
        self.node.separator()
    }

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Child on the negative side of the separator.
    pub fn left(&self) -> Option<Container<'a, T>> {
        self.node.left().map(|n| Container::new(self.tree, n))
    }

    /// Child on the positive side of the separator.
    pub fn right(&self) -> Option<Container<'a, T>> {
        self.node.right().map(|n| Container::new(self.tree, n))
    }

    /// Indices stored at this node; empty for internal nodes.
    #[inline]
    pub fn indices(&self) -> &'a [Index] {
        self.node.indices()
    }

    /// Number of triangles stored at this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.node.indices().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node.indices().is_empty()
    }

    /// Triangles stored at this node with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (Index, &'a Triangle<T>)> + 'a {
        let triangles = self.tree.triangles();
        self.node.indices().iter().map(move |&i| (i, &triangles[i]))
    }

    /// Breadth-first walk of the subtree rooted here, starting with this node.
    pub fn nodes(&self) -> Nodes<'a, T> {
        Nodes::new(self.tree, Some(self.node))
    }
}

/// Breadth-first iterator over the nodes of a tree or subtree.
#[derive(Debug)]
pub struct Nodes<'a, T: Scalar> {
    tree: &'a KdTree<T>,
    queue: VecDeque<&'a KdNode<T>>,
}

impl<'a, T: Scalar> Nodes<'a, T> {
    pub(crate) fn new(tree: &'a KdTree<T>, start: Option<&'a KdNode<T>>) -> Self {
        Self {
            tree,
            queue: start.into_iter().collect(),
        }
    }
}

impl<'a, T: Scalar> Iterator for Nodes<'a, T> {
    type Item = Container<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(Container::new(self.tree, node))
    }
}
