//! Split selection strategies for KD tree construction.
//!
//! The split determines how evenly triangles are distributed between the
//! two children and how many straddle the separator and end up in both.

use std::cmp::Ordering;

use crate::boundbox::{Axis, BoundBox};
use crate::tolerance::Scalar;
use crate::triangle::Triangle;

use super::Index;

/// Strategy for choosing where a node is split.
pub trait SplitStrategy<T: Scalar> {
    /// Chooses a concrete axis and a separator on it for the triangles at
    /// `indices`, whose combined box is `bound_box`.
    ///
    /// Returns `None` if the node should stay a leaf.
    fn choose(
        &self,
        triangles: &[Triangle<T>],
        indices: &[Index],
        bound_box: &BoundBox<T>,
    ) -> Option<(Axis, T)>;
}

/// Splits the longest axis at the median triangle centroid.
///
/// Centroids are ordered by coordinate, then by index, so the choice is
/// deterministic for equal centroids.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianSplit;

impl<T: Scalar> SplitStrategy<T> for MedianSplit {
    fn choose(
        &self,
        triangles: &[Triangle<T>],
        indices: &[Index],
        bound_box: &BoundBox<T>,
    ) -> Option<(Axis, T)> {
        let axis = bound_box.max_dim();
        let i = axis.index().ok()?;

        let mut keyed: Vec<(T, Index)> = indices
            .iter()
            .map(|&idx| (triangles[idx].centroid()[i], idx))
            .collect();
        keyed.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });

        let (separator, _) = *keyed.get(keyed.len() / 2)?;
        Some((axis, separator))
    }
}

/// Splits the longest axis at the middle of the node's box.
///
/// Cheaper than [`MedianSplit`] but sensitive to outliers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointSplit;

impl<T: Scalar> SplitStrategy<T> for MidpointSplit {
    fn choose(
        &self,
        _triangles: &[Triangle<T>],
        indices: &[Index],
        bound_box: &BoundBox<T>,
    ) -> Option<(Axis, T)> {
        if indices.is_empty() {
            return None;
        }
        let axis = bound_box.max_dim();
        let separator = bound_box.center(axis).ok()?;
        Some((axis, separator))
    }
}
