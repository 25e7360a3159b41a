use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trigeom::broad_phase::{brute_force, intersecting_indices};
use trigeom::{KdTree, Triangle, Vec3};

fn triangles(count: usize) -> Vec<Triangle<f64>> {
    let mut rng = StdRng::seed_from_u64(0);
    let mut coord = |half: f64| rng.gen_range(-half..half);
    (0..count)
        .map(|_| {
            let center = Vec3::new(coord(50.0), coord(50.0), coord(50.0));
            let mut corner = || center + Vec3::new(coord(1.0), coord(1.0), coord(1.0));
            Triangle::new(corner(), corner(), corner())
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let scene = triangles(2000);

    c.bench_function("brute force 2000", |b| b.iter(|| brute_force(black_box(&scene))));

    c.bench_function("kd-tree build 2000", |b| {
        b.iter(|| KdTree::build(black_box(scene.clone())))
    });

    let tree = KdTree::build(scene.clone());
    c.bench_function("kd-tree query 2000", |b| {
        b.iter(|| intersecting_indices(black_box(&tree)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
