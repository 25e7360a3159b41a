//! KD tree over triangles for broad-phase intersection queries.
//!
//! The tree recursively splits the bounding box of its triangles along one
//! axis at a time. It only partitions; the pairwise tests are run by the
//! [`broad_phase`](crate::broad_phase) driver, which relies on:
//!
//! - every pair of triangles that may touch sharing at least one leaf
//!   (straddling triangles are stored on both sides, and triangle boxes are
//!   grown by the tolerance threshold)
//! - [`KdTree::is_on_neg_side`] / [`KdTree::is_on_pos_side`] to route a
//!   foreign triangle down the tree
//!
//! # Architecture
//!
//! - [`KdTree`]: owns the triangles and the root node
//! - [`KdNode`]: leaf (indices) or internal node (axis, separator, children)
//! - [`Container`]: read-only view of a node, with access to its triangles
//! - [`SplitStrategy`]: chooses the split of a node
//! - [`KdVisitor`]: callback for leaf traversal

mod container;
mod node;
mod split;
mod tree;
mod visitor;

/// Position of a triangle in the tree's triangle array.
pub type Index = usize;

pub use container::{Container, Nodes};
pub use node::KdNode;
pub use split::{MedianSplit, MidpointSplit, SplitStrategy};
pub use tree::{KdTree, KdTreeConfig};
pub use visitor::{CollectingVisitor, FnVisitor, KdVisitor};
