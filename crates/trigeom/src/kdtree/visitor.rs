//! Visitor pattern for KD tree leaf traversal.

use crate::tolerance::Scalar;

use super::{Container, Index};

/// Visitor for processing leaves during [`KdTree::visit_leaves`](super::KdTree::visit_leaves).
pub trait KdVisitor<T: Scalar> {
    /// Called once per leaf, left subtree before right subtree.
    fn visit(&mut self, leaf: Container<'_, T>);
}

/// Collects the index list of every visited leaf.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Vec<Index>>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the visitor, returning one index list per leaf in visit order.
    pub fn into_leaves(self) -> Vec<Vec<Index>> {
        self.collected
    }

    /// Index lists collected so far.
    pub fn leaves(&self) -> &[Vec<Index>] {
        &self.collected
    }
}

impl<T: Scalar> KdVisitor<T> for CollectingVisitor {
    fn visit(&mut self, leaf: Container<'_, T>) {
        self.collected.push(leaf.indices().to_vec());
    }
}

/// A visitor that calls a closure for each leaf.
pub struct FnVisitor<F> {
    func: F,
}

impl<F> FnVisitor<F> {
    /// Wraps `func` as a visitor.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<T, F> KdVisitor<T> for FnVisitor<F>
where
    T: Scalar,
    F: FnMut(Container<'_, T>),
{
    fn visit(&mut self, leaf: Container<'_, T>) {
        (self.func)(leaf);
    }
}
