use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trigeom::{Triangle, Vec3, is_intersect};

const TILTS: [f64; 7] = [1e-12, 1e-11, 1e-10, 1e-9, 1e-8, 1e-7, 1e-6];

fn random_point(rng: &mut StdRng, half: f64) -> Vec3<f64> {
    Vec3::new(
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
    )
}

fn random_triangle(rng: &mut StdRng, half: f64) -> Triangle<f64> {
    Triangle::new(
        random_point(rng, half),
        random_point(rng, half),
        random_point(rng, half),
    )
}

/// Rotates `point` by `angle` around the line through `center` with unit
/// direction `axis`.
fn rotate(point: Vec3<f64>, center: Vec3<f64>, axis: Vec3<f64>, angle: f64) -> Vec3<f64> {
    let p = point - center;
    let (sin, cos) = angle.sin_cos();
    center + p * cos + axis.cross(&p) * sin + axis * (axis.dot(&p) * (1.0 - cos))
}

fn tilted(tri: &Triangle<f64>, center: Vec3<f64>, axis: Vec3<f64>, angle: f64) -> Triangle<f64> {
    let [a, b, c] = tri.vertices().map(|v| rotate(v, center, axis, angle));
    Triangle::new(a, b, c)
}

fn assert_symmetric(a: &Triangle<f64>, b: &Triangle<f64>) -> bool {
    let ab = is_intersect(a, b);
    assert_eq!(ab, is_intersect(b, a), "{a} vs {b}");
    ab
}

#[test]
fn random_pairs_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut hits = 0;
    for _ in 0..2000 {
        let a = random_triangle(&mut rng, 2.0);
        let b = random_triangle(&mut rng, 2.0);
        if assert_symmetric(&a, &b) {
            hits += 1;
        }
    }
    assert!(hits > 0);
}

#[test]
fn tilt_around_an_inner_axis_keeps_contact() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let base = random_triangle(&mut rng, 100.0);
        let center = base.centroid();
        let axis = (base[1] - base[0]).normalize();

        for angle in TILTS {
            let other = tilted(&base, center, axis, angle);
            assert!(assert_symmetric(&base, &other), "tilt {angle}");
        }
    }
}

#[test]
fn tilt_of_a_shifted_copy_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let base = random_triangle(&mut rng, 100.0);
        let normal = base.normal().normalize();
        let shift = normal * rng.gen_range(-1e-6..1e-6);
        let center = base.centroid() + random_point(&mut rng, 10.0);
        let axis = random_point(&mut rng, 1.0).cross(&normal).normalize();

        for angle in TILTS {
            let other = tilted(&base, center + shift, axis, angle);
            assert_symmetric(&base, &other);
        }
    }
}

#[test]
fn far_apart_parallel_copies_do_not_intersect() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..50 {
        let base = random_triangle(&mut rng, 10.0);
        let normal = base.normal().normalize();
        let [a, b, c] = base.vertices().map(|v| v + normal * 1e-3);
        assert!(!assert_symmetric(&base, &Triangle::new(a, b, c)));
    }
}
