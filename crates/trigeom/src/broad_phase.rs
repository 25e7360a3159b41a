//! Finding every triangle that intersects at least one other triangle.
//!
//! [`brute_force`] tests all pairs and serves as the reference answer;
//! [`intersecting_indices`] only tests pairs sharing a kd-tree leaf.

use log::debug;

use crate::intersection::is_intersect;
use crate::kdtree::{Container, FnVisitor, Index, KdTree};
use crate::tolerance::{Scalar, Tolerance};
use crate::triangle::Triangle;

/// Indices, ascending, of triangles intersecting another one. O(N²).
pub fn brute_force<T: Scalar>(triangles: &[Triangle<T>]) -> Vec<Index> {
    let mut hit = vec![false; triangles.len()];
    for i in 0..triangles.len() {
        for j in (i + 1)..triangles.len() {
            if hit[i] && hit[j] {
                continue;
            }
            if is_intersect(&triangles[i], &triangles[j]) {
                hit[i] = true;
                hit[j] = true;
            }
        }
    }
    collect_hits(&hit)
}

/// Same result as [`brute_force`] over `tree.triangles()`, testing only
/// pairs that share a leaf.
///
/// Runs under the threshold the tree was built with.
pub fn intersecting_indices<T: Scalar>(tree: &KdTree<T>) -> Vec<Index> {
    let _tolerance = Tolerance::scoped(tree.threshold());
    let triangles = tree.triangles();
    let mut hit = vec![false; tree.len()];
    let mut tests = 0usize;

    let mut visitor = FnVisitor::new(|leaf: Container<'_, T>| {
        let indices = leaf.indices();
        for (a, &i) in indices.iter().enumerate() {
            for &j in &indices[a + 1..] {
                if hit[i] && hit[j] {
                    continue;
                }
                tests += 1;
                if is_intersect(&triangles[i], &triangles[j]) {
                    hit[i] = true;
                    hit[j] = true;
                }
            }
        }
    });
    tree.visit_leaves(&mut visitor);

    debug!("broad phase: {tests} pair tests for {} triangles", tree.len());
    collect_hits(&hit)
}

/// Indices, ascending, of tree triangles intersecting `triangle`.
///
/// Descends from the root, following only the children whose side of the
/// separator `triangle` touches (both when it straddles). Runs under the
/// threshold the tree was built with.
pub fn intersecting_with<T: Scalar>(tree: &KdTree<T>, triangle: &Triangle<T>) -> Vec<Index> {
    let _tolerance = Tolerance::scoped(tree.threshold());
    let mut hit = vec![false; tree.len()];
    let mut stack: Vec<Container<'_, T>> = tree.root().into_iter().collect();

    while let Some(node) = stack.pop() {
        match (node.left(), node.right(), node.separator()) {
            (Some(left), Some(right), Some(separator)) => {
                let axis = node.axis();
                if !KdTree::is_on_pos_side(axis, separator, triangle) {
                    stack.push(left);
                }
                if !KdTree::is_on_neg_side(axis, separator, triangle) {
                    stack.push(right);
                }
            }
            _ => {
                if !node.bound_box().intersects(&triangle.bound_box()) {
                    continue;
                }
                for (i, candidate) in node.iter() {
                    if !hit[i] && is_intersect(candidate, triangle) {
                        hit[i] = true;
                    }
                }
            }
        }
    }
    collect_hits(&hit)
}

fn collect_hits(hit: &[bool]) -> Vec<Index> {
    hit.iter()
        .enumerate()
        .filter_map(|(i, &h)| h.then_some(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdtree::{KdTreeConfig, MedianSplit};

    fn make_triangle(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle<f64> {
        Triangle::new(a.into(), b.into(), c.into())
    }

    fn scene() -> Vec<Triangle<f64>> {
        vec![
            // 0 and 1 cross
            make_triangle([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
            make_triangle([0.0, 0.0, 1.0], [0.0, 1.0, -1.0], [1.0, 0.0, -1.0]),
            // 2 alone
            make_triangle([10.0, 10.0, 10.0], [11.0, 10.0, 10.0], [10.0, 11.0, 10.0]),
            // 3 and 4 coplanar, sharing an edge
            make_triangle([20.0, 0.0, 0.0], [23.0, 0.0, 0.0], [20.0, 3.0, 0.0]),
            make_triangle([23.0, 0.0, 0.0], [20.0, 3.0, 0.0], [23.0, 3.0, 0.0]),
            // 5 alone, parallel to 0
            make_triangle([0.0, 0.0, 5.0], [0.0, 1.0, 5.0], [1.0, 0.0, 5.0]),
            // 6 degenerate point inside 3
            make_triangle([20.5, 0.5, 0.0], [20.5, 0.5, 0.0], [20.5, 0.5, 0.0]),
        ]
    }

    #[test]
    fn brute_force_on_scene() {
        assert_eq!(brute_force(&scene()), vec![0, 1, 3, 4, 6]);
    }

    #[test]
    fn brute_force_trivial_inputs() {
        assert!(brute_force::<f64>(&[]).is_empty());
        assert!(brute_force(&scene()[..1]).is_empty());
    }

    #[test]
    fn tree_matches_brute_force() {
        for leaf_size in [1, 2, 8] {
            let config = KdTreeConfig {
                leaf_size,
                ..KdTreeConfig::default()
            };
            let tree = KdTree::build_with(scene(), config, &MedianSplit);
            assert_eq!(intersecting_indices(&tree), brute_force(&scene()), "leaf size {leaf_size}");
        }
    }

    #[test]
    fn empty_tree_has_no_hits() {
        let tree = KdTree::<f64>::build(Vec::new());
        assert!(intersecting_indices(&tree).is_empty());
        let query = make_triangle([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(intersecting_with(&tree, &query).is_empty());
    }

    #[test]
    fn queries_use_the_build_threshold() {
        let config = KdTreeConfig {
            leaf_size: 1,
            ..KdTreeConfig::default()
        };
        let tree = KdTree::build_with(scene(), config, &MedianSplit);
        let query = make_triangle([0.2, 0.2, -2.0], [0.2, 0.2, 6.0], [0.3, 0.2, 6.0]);

        let _coarse = Tolerance::<f64>::scoped(1.0);
        assert_eq!(intersecting_indices(&tree), vec![0, 1, 3, 4, 6]);
        assert_eq!(intersecting_with(&tree, &query), vec![0, 1, 5]);
        assert_eq!(Tolerance::<f64>::get(), 1.0);
    }

    #[test]
    fn foreign_triangle_query() {
        let config = KdTreeConfig {
            leaf_size: 1,
            ..KdTreeConfig::default()
        };
        let tree = KdTree::build_with(scene(), config, &MedianSplit);

        let query = make_triangle([0.2, 0.2, -2.0], [0.2, 0.2, 6.0], [0.3, 0.2, 6.0]);
        assert_eq!(intersecting_with(&tree, &query), vec![0, 1, 5]);

        let far = make_triangle([100.0, 0.0, 0.0], [101.0, 0.0, 0.0], [100.0, 1.0, 0.0]);
        assert!(intersecting_with(&tree, &far).is_empty());
    }
}
