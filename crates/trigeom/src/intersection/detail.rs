//! Building blocks of the triangle intersection test.
//!
//! Exposed for testing and for callers that want a single stage of the
//! test (e.g. the coplanar check) without the full dispatch.

use crate::line::Line;
use crate::plane::Plane;
use crate::segment::Segment;
use crate::tolerance::{Scalar, Tolerance, abs};
use crate::triangle::Triangle;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

use super::{LineIntersection, intersect_lines};

/// A triangle projected onto a coordinate plane, counter-clockwise.
pub type Trian2<T> = [Vec2<T>; 3];

/// Closed scalar interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: Scalar> {
    min: T,
    max: T,
}

impl<T: Scalar> Interval<T> {
    /// Interval spanning both values, in either order.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Smallest interval containing every value. `None` for an empty input.
    pub fn spanning<I: IntoIterator<Item = T>>(values: I) -> Option<Self> {
        let mut values = values.into_iter();
        let first = values.next()?;
        Some(values.fold(Self::new(first, first), Self::union_with))
    }

    fn union_with(self, v: T) -> Self {
        Self {
            min: if v < self.min { v } else { self.min },
            max: if v > self.max { v } else { self.max },
        }
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Intervals share a point. Touching counts, and each bound is widened
    /// by the current threshold.
    pub fn overlaps(&self, other: &Self) -> bool {
        let tol = Tolerance::<T>::get();
        other.min <= self.max + tol && self.min <= other.max + tol
    }
}

/// Free-function form of [`Interval::overlaps`].
pub fn is_overlap<T: Scalar>(a: &Interval<T>, b: &Interval<T>) -> bool {
    a.overlaps(b)
}

/// All values are strictly positive or all strictly negative. A value
/// within tolerance of zero has neither sign.
pub fn is_all_pos_neg<T: Scalar>(values: &[T]) -> bool {
    let tol = Tolerance::<T>::get();
    values.iter().all(|&v| v > tol) || values.iter().all(|&v| v < -tol)
}

fn signed_distances<T: Scalar>(plane: &Plane<T>, tri: &Triangle<T>) -> [T; 3] {
    tri.vertices().map(|v| plane.signed_distance(&v))
}

/// `tri` lies strictly on one side of `plane`.
pub fn is_on_one_side<T: Scalar>(plane: &Plane<T>, tri: &Triangle<T>) -> bool {
    is_all_pos_neg(&signed_distances(plane, tri))
}

/// Projects `tri` onto the coordinate plane most aligned with `plane`.
///
/// The coordinate with the largest normal component is dropped; vertices
/// are reordered counter-clockwise.
pub fn get_trian2<T: Scalar>(plane: &Plane<T>, tri: &Triangle<T>) -> Trian2<T> {
    let normal = plane.normal();
    let mut dropped = 0;
    for i in 1..3 {
        if abs(normal[i]) > abs(normal[dropped]) {
            dropped = i;
        }
    }
    let (u, v) = ((dropped + 1) % 3, (dropped + 2) % 3);
    let (u, v) = if u < v { (u, v) } else { (v, u) };

    let mut res = tri.vertices().map(|p| Vec2::new(p[u], p[v]));
    if !is_counter_clockwise(&res) {
        res.swap(0, 1);
    }
    res
}

/// Strictly positive signed area.
pub fn is_counter_clockwise<T: Scalar>(tr: &Trian2<T>) -> bool {
    (tr[1] - tr[0]).cross(&(tr[2] - tr[0])) > nalgebra::zero()
}

/// Extent of the triangle projected onto `axis`.
pub fn compute_interval<T: Scalar>(tr: &Trian2<T>, axis: &Vec2<T>) -> Interval<T> {
    let a = axis.dot(&tr[0]);
    let b = axis.dot(&tr[1]);
    let c = axis.dot(&tr[2]);
    Interval::new(a, b).union_with(c)
}

/// Separating-axis test for two triangles lying in `plane`.
///
/// The candidate axes are the in-plane normals of all six edges. Either
/// triangle may be degenerate.
pub fn is_intersect_2d<T: Scalar>(plane: &Plane<T>, tr1: &Triangle<T>, tr2: &Triangle<T>) -> bool {
    let trian1 = get_trian2(plane, tr1);
    let trian2 = get_trian2(plane, tr2);

    for trian in [&trian1, &trian2] {
        for (i0, i1) in [(0, 2), (1, 0), (2, 1)] {
            let axis = (trian[i0] - trian[i1]).perp().normalize();
            let s1 = compute_interval(&trian1, &axis);
            let s2 = compute_interval(&trian2, &axis);
            if !s1.overlaps(&s2) {
                return false;
            }
        }
    }
    true
}

/// Interval that `tri` covers on `line`, where `line` lies in `plane` and
/// `tri` is not strictly on one side of it.
///
/// Built from the points where edges with endpoints on strictly opposite
/// sides cross the plane, plus the vertices lying on it. Parameters are
/// measured in length units along `line`.
pub fn line_interval<T: Scalar>(
    tri: &Triangle<T>,
    plane: &Plane<T>,
    line: &Line<T>,
) -> Option<Interval<T>> {
    let dir = line.dir().normalize();
    let proj = tri.vertices().map(|v| dir.dot(&(v - line.org())));
    let dist = signed_distances(plane, tri);
    let side = dist.map(|d| {
        if Tolerance::is_zero(d) {
            0i8
        } else if d > nalgebra::zero() {
            1
        } else {
            -1
        }
    });

    let mut params = Vec::with_capacity(3);
    for i in 0..3 {
        let j = (i + 1) % 3;
        if side[i] == 0 {
            params.push(proj[i]);
        }
        if side[i] * side[j] < 0 {
            let t = dist[i] / (dist[i] - dist[j]);
            params.push(proj[i] + (proj[j] - proj[i]) * t);
        }
    }
    Interval::spanning(params)
}

/// Möller–Haines test for two proper triangles in crossing planes.
pub fn is_intersect_moller_haines<T: Scalar>(
    tr1: &Triangle<T>,
    pl1: &Plane<T>,
    tr2: &Triangle<T>,
    pl2: &Plane<T>,
    line: &Line<T>,
) -> bool {
    let Some(s1) = line_interval(tr1, pl2, line) else {
        return false;
    };
    let Some(s2) = line_interval(tr2, pl1, line) else {
        return false;
    };
    s1.overlaps(&s2)
}

/// `pt` lies inside or on the border of the proper triangle `tri` in `plane`.
pub fn is_intersect_point_triangle<T: Scalar>(
    pt: &Vec3<T>,
    tri: &Triangle<T>,
    plane: &Plane<T>,
) -> bool {
    if !plane.belongs(pt) {
        return false;
    }

    // pt = v0 + u * edge1 + v * edge2
    let point = *pt - tri[0];
    let edge1 = tri[1] - tri[0];
    let edge2 = tri[2] - tri[0];

    let e1e1 = edge1.dot(&edge1);
    let e1e2 = edge1.dot(&edge2);
    let e1pt = edge1.dot(&point);
    let e2e2 = edge2.dot(&edge2);
    let e2pt = edge2.dot(&point);

    let denom = e1e1 * e2e2 - e1e2 * e1e2;
    let u = (e2e2 * e1pt - e1e2 * e2pt) / denom;
    let v = (e1e1 * e2pt - e1e2 * e1pt) / denom;

    let eps = Tolerance::<T>::get();
    let one: T = nalgebra::one();
    u > -eps && v > -eps && u + v < one + eps
}

/// `pt` lies on `segment`, endpoints included.
pub fn is_intersect_point_segment<T: Scalar>(pt: &Vec3<T>, segment: &Segment<T>) -> bool {
    segment.contains(pt)
}

/// Two segments share a point. Either may be reduced to a point.
pub fn is_intersect_segment_segment<T: Scalar>(s1: &Segment<T>, s2: &Segment<T>) -> bool {
    let (l1, l2) = match (s1.line(), s2.line()) {
        (Ok(l1), Ok(l2)) => (l1, l2),
        (Err(_), _) => return s2.contains(&s1.start()),
        (_, Err(_)) => return s1.contains(&s2.start()),
    };

    match intersect_lines(&l1, &l2) {
        LineIntersection::Line(_) => s1.overlaps_collinear(s2),
        LineIntersection::Point(pt) => s1.contains(&pt) && s2.contains(&pt),
        LineIntersection::None => false,
    }
}

/// Segment against a proper triangle lying in `plane`.
pub fn is_intersect_segment_triangle<T: Scalar>(
    segment: &Segment<T>,
    tri: &Triangle<T>,
    plane: &Plane<T>,
) -> bool {
    let d1 = plane.signed_distance(&segment.start());
    let d2 = plane.signed_distance(&segment.end());

    if is_all_pos_neg(&[d1, d2]) {
        return false;
    }

    if Tolerance::is_zero(d1) && Tolerance::is_zero(d2) {
        let flat = Triangle::new(segment.start(), segment.end(), segment.end());
        return is_intersect_2d(plane, tri, &flat);
    }

    let (d1, d2) = (abs(d1), abs(d2));
    let pt = segment.start() + segment.direction() * (d1 / (d1 + d2));
    is_intersect_point_triangle(&pt, tri, plane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn make_triangle(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle<f64> {
        Triangle::new(a.into(), b.into(), c.into())
    }

    fn xy_plane() -> Plane<f64> {
        Plane::from_normal_and_dist(Vec3::new(0.0, 0.0, 1.0), 0.0).unwrap()
    }

    #[test]
    fn overlap_of_intervals() {
        let base = Interval::new(-10.0, 10.0);

        for (a, b) in [(-5.0, 5.0), (-11.0, 11.0), (0.0, 11.0), (-11.0, 0.0)] {
            assert!(is_overlap(&base, &Interval::new(a, b)), "[{a}, {b}]");
        }
        for (a, b) in [(11.0, 12.0), (-12.0, -11.0)] {
            assert!(!is_overlap(&base, &Interval::new(a, b)), "[{a}, {b}]");
        }
    }

    #[test]
    fn touching_intervals_overlap() {
        let a = Interval::new(0.0, 1.0);
        assert!(a.overlaps(&Interval::new(1.0, 2.0)));
        assert!(Interval::new(2.0, 1.0).overlaps(&a));
    }

    #[test]
    fn spanning_interval() {
        let s = Interval::spanning([3.0, -1.0, 2.0]).unwrap();
        assert_eq!(s, Interval::new(-1.0, 3.0));
        assert!(Interval::<f64>::spanning([]).is_none());
    }

    #[test]
    fn all_pos_neg() {
        assert!(is_all_pos_neg(&[1.0, 2.0, 3.0]));
        assert!(is_all_pos_neg(&[-1.0, -2.0, -3.0]));
        assert!(!is_all_pos_neg(&[1.0, -2.0, 3.0]));
        assert!(!is_all_pos_neg(&[1.0, 0.0, 3.0]));
        assert!(!is_all_pos_neg(&[-1.0, 1e-20, -3.0]));
    }

    #[test]
    fn trian2_drops_dominant_axis_and_orders_ccw() {
        let tri = make_triangle([0.0, 0.0, 2.0], [0.0, 1.0, 2.0], [1.0, 0.0, 2.0]);
        let tr = get_trian2(&xy_plane(), &tri);

        assert!(is_counter_clockwise(&tr));
        assert_eq!(tr[0], Vec2::new(0.0, 1.0));
        assert_eq!(tr[1], Vec2::new(0.0, 0.0));
        assert_eq!(tr[2], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn counter_clockwise() {
        let ccw = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let cw = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)];
        assert!(is_counter_clockwise(&ccw));
        assert!(!is_counter_clockwise(&cw));
    }

    #[test]
    fn interval_along_axis() {
        let tr = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 3.0)];
        let s = compute_interval(&tr, &Vec2::new(1.0, 1.0));
        assert_eq!(s, Interval::new(0.0, 3.0));
    }

    #[test]
    fn coplanar_separating_axis() {
        let t1 = make_triangle([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]);
        let t2 = make_triangle([3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [2.0, 2.0, 0.0]);
        let t3 = make_triangle([3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 0.0]);
        let plane = xy_plane();

        assert!(!is_intersect_2d(&plane, &t1, &t2));
        assert!(is_intersect_2d(&plane, &t1, &t3));
        assert!(is_intersect_2d(&plane, &t2, &t3));
    }

    #[test]
    fn point_in_triangle() {
        let tri = make_triangle([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
        let plane = tri.plane().unwrap();

        assert!(is_intersect_point_triangle(&Vec3::new(0.5, 0.5, 0.0), &tri, &plane));
        assert!(is_intersect_point_triangle(&Vec3::new(1.0, 1.0, 0.0), &tri, &plane));
        assert!(is_intersect_point_triangle(&Vec3::new(0.0, 0.0, 0.0), &tri, &plane));
        assert!(!is_intersect_point_triangle(&Vec3::new(1.5, 1.5, 0.0), &tri, &plane));
        assert!(!is_intersect_point_triangle(&Vec3::new(0.5, 0.5, 0.1), &tri, &plane));
    }

    #[test]
    fn segment_against_segment() {
        let s = |a: [f64; 3], b: [f64; 3]| Segment::new(a.into(), b.into());

        let base = s([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert!(is_intersect_segment_segment(&base, &s([1.0, -1.0, 0.0], [1.0, 1.0, 0.0])));
        assert!(!is_intersect_segment_segment(&base, &s([3.0, -1.0, 0.0], [3.0, 1.0, 0.0])));
        assert!(is_intersect_segment_segment(&base, &s([5.0, 0.0, 0.0], [1.5, 0.0, 0.0])));
        assert!(!is_intersect_segment_segment(&base, &s([5.0, 0.0, 0.0], [2.5, 0.0, 0.0])));
        assert!(!is_intersect_segment_segment(&base, &s([0.0, 1.0, 0.0], [2.0, 1.0, 0.0])));
        assert!(!is_intersect_segment_segment(&base, &s([1.0, -1.0, 1.0], [1.0, 1.0, 1.0])));
    }

    #[test]
    fn segment_against_triangle() {
        let tri = make_triangle([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
        let plane = tri.plane().unwrap();
        let s = |a: [f64; 3], b: [f64; 3]| Segment::new(a.into(), b.into());

        assert!(is_intersect_segment_triangle(&s([0.5, 0.5, -1.0], [0.5, 0.5, 1.0]), &tri, &plane));
        assert!(!is_intersect_segment_triangle(&s([3.0, 3.0, -1.0], [3.0, 3.0, 1.0]), &tri, &plane));
        assert!(!is_intersect_segment_triangle(&s([0.5, 0.5, 1.0], [0.5, 0.5, 2.0]), &tri, &plane));
        assert!(is_intersect_segment_triangle(&s([0.5, 0.5, 0.0], [0.5, 0.5, 2.0]), &tri, &plane));
        assert!(is_intersect_segment_triangle(&s([-1.0, 1.0, 0.0], [1.0, 1.0, 0.0]), &tri, &plane));
        assert!(!is_intersect_segment_triangle(&s([3.0, 0.0, 0.0], [0.0, 3.0, 0.0]), &tri, &plane));
    }

    #[test]
    fn interval_on_intersection_line() {
        let tri = make_triangle([0.0, 0.0, -1.0], [2.0, 0.0, 1.0], [0.0, 0.0, 1.0]);
        let line = Line::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();

        let s = line_interval(&tri, &xy_plane(), &line).unwrap();
        assert_relative_eq!(s.min(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.max(), 1.0, epsilon = 1e-12);
    }
}
