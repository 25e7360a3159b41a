use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trigeom::broad_phase::{brute_force, intersecting_indices, intersecting_with};
use trigeom::kdtree::{MedianSplit, MidpointSplit};
use trigeom::{KdTree, KdTreeConfig, Triangle, Vec3};

/// Small triangles scattered in a cube, dense enough that a fair share of
/// them intersect.
fn random_triangles(seed: u64, count: usize, space: f64, size: f64) -> Vec<Triangle<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let point = |rng: &mut StdRng, half: f64| {
        Vec3::new(
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
        )
    };
    (0..count)
        .map(|_| {
            let center = point(&mut rng, space);
            Triangle::new(
                center + point(&mut rng, size),
                center + point(&mut rng, size),
                center + point(&mut rng, size),
            )
        })
        .collect()
}

fn configs() -> Vec<KdTreeConfig> {
    vec![
        KdTreeConfig::default(),
        KdTreeConfig {
            leaf_size: 1,
            ..KdTreeConfig::default()
        },
        KdTreeConfig {
            leaf_size: 3,
            max_depth: 4,
        },
    ]
}

#[test]
fn tree_agrees_with_brute_force() {
    for seed in 0..4 {
        let triangles = random_triangles(seed, 250, 10.0, 1.5);
        let expected = brute_force(&triangles);
        assert!(!expected.is_empty(), "seed {seed} produced no intersections");

        for config in configs() {
            let median = KdTree::build_with(triangles.clone(), config, &MedianSplit);
            assert_eq!(intersecting_indices(&median), expected, "median, seed {seed}, {config:?}");

            let midpoint = KdTree::build_with(triangles.clone(), config, &MidpointSplit);
            assert_eq!(intersecting_indices(&midpoint), expected, "midpoint, seed {seed}, {config:?}");
        }
    }
}

#[test]
fn single_queries_agree_with_pairwise_tests() {
    let triangles = random_triangles(42, 120, 6.0, 1.5);
    let tree = KdTree::build_with(
        triangles.clone(),
        KdTreeConfig {
            leaf_size: 2,
            ..KdTreeConfig::default()
        },
        &MedianSplit,
    );

    for query in random_triangles(7, 20, 6.0, 3.0) {
        let expected: Vec<usize> = triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| trigeom::is_intersect(*t, &query))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(intersecting_with(&tree, &query), expected, "query {query}");
    }
}

#[test]
fn every_triangle_lands_in_a_leaf() {
    let triangles = random_triangles(3, 300, 10.0, 1.0);
    let tree = KdTree::build(triangles);

    let mut seen = vec![false; tree.len()];
    for leaf in tree.leaves() {
        for (i, _) in leaf.iter() {
            seen[i] = true;
        }
    }
    assert!(seen.into_iter().all(|s| s));
    assert!(tree.depth() <= tree.config().max_depth + 1);
}
