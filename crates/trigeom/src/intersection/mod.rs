//! Intersection of planes, lines and triangles.
//!
//! "No intersection" and "coincident" are ordinary outcomes, returned as
//! enum variants:
//!
//! - [`intersect_planes`]: nothing, a line or the same plane
//! - [`intersect_lines`]: nothing, a point or the same line
//! - [`is_intersect`]: whether two triangles share at least one point
//!
//! # Triangle test
//!
//! Each triangle is first classified with [`Triangle::kind`] as a point, a
//! segment or a proper triangle, and the pair of kinds selects the test.
//! Two proper triangles go through cheap same-side rejections, the coplanar
//! separating-axis test, and otherwise the Möller–Haines interval test on
//! the line where the two planes meet.
//!
//! ```
//! use trigeom::{Triangle, Vec3, intersection::is_intersect};
//!
//! let flat = Triangle::new(
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//! );
//! let tilted = Triangle::new(
//!     Vec3::new(0.0, 0.0, 1.0),
//!     Vec3::new(0.0, 1.0, -1.0),
//!     Vec3::new(1.0, 0.0, -1.0),
//! );
//! assert!(is_intersect(&flat, &tilted));
//! ```

pub mod detail;

use log::trace;

use crate::line::{Line, LineRelation};
use crate::plane::Plane;
use crate::tolerance::Scalar;
use crate::triangle::{Triangle, TriangleKind};
use crate::vec3::Vec3;

/// Result of [`intersect_planes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneIntersection<T: Scalar> {
    /// Parallel, distinct planes.
    None,
    Line(Line<T>),
    /// Both arguments describe the same plane.
    Plane(Plane<T>),
}

/// Result of [`intersect_lines`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection<T: Scalar> {
    /// Parallel distinct or skew lines.
    None,
    Point(Vec3<T>),
    /// Both arguments describe the same line.
    Line(Line<T>),
}

/// Intersects two planes.
///
/// For crossing planes the line direction is `n1 × n2` and its origin is
/// the point `a * n1 + b * n2` satisfying both plane equations:
///
/// ```text
/// a = (d2 (n1·n2) - d1) / ((n1·n2)² - 1)
/// b = (d1 (n1·n2) - d2) / ((n1·n2)² - 1)
/// ```
///
/// with the denominator evaluated as `-|n1 × n2|²`.
pub fn intersect_planes<T: Scalar>(pl1: &Plane<T>, pl2: &Plane<T>) -> PlaneIntersection<T> {
    let n1 = pl1.normal();
    let n2 = pl2.normal();
    let dir = n1.cross(&n2);

    if dir.is_zero() {
        return if pl1 == pl2 {
            PlaneIntersection::Plane(*pl1)
        } else {
            PlaneIntersection::None
        };
    }

    let (d1, d2) = (pl1.dist(), pl2.dist());
    let n1n2 = n1.dot(&n2);
    // (n1·n2)² - 1 = -|n1 × n2|² for unit normals. The cross form stays
    // non-zero for nearly parallel planes, where (n1·n2)² rounds to 1.
    let denom = -dir.length2();
    let a = (d2 * n1n2 - d1) / denom;
    let b = (d1 * n1n2 - d2) / denom;

    PlaneIntersection::Line(Line::from_parts(n1 * a + n2 * b, dir))
}

/// Intersects two lines.
///
/// Crossing lines meet at `l1.get_point(t1)` with
/// `t1 = ((org2 - org1) × dir2) · (dir1 × dir2) / |dir1 × dir2|²`.
pub fn intersect_lines<T: Scalar>(l1: &Line<T>, l2: &Line<T>) -> LineIntersection<T> {
    match l1.relation(l2) {
        LineRelation::Coincident => LineIntersection::Line(*l1),
        LineRelation::Parallel | LineRelation::Skew => LineIntersection::None,
        LineRelation::Crossing => {
            let d1xd2 = l1.dir().cross(&l2.dir());
            let t1 = (l2.org() - l1.org()).cross(&l2.dir()).dot(&d1xd2) / d1xd2.length2();
            LineIntersection::Point(l1.get_point(t1))
        }
    }
}

/// Whether two triangles share at least one point, degenerate triangles
/// included.
pub fn is_intersect<T: Scalar>(tr1: &Triangle<T>, tr2: &Triangle<T>) -> bool {
    use TriangleKind::{Point, Proper, Segment};

    match (tr1.kind(), tr2.kind()) {
        (Proper(pl1), Proper(pl2)) => is_intersect_proper(tr1, &pl1, tr2, &pl2),

        (Proper(plane), Point(pt)) | (Point(pt), Proper(plane)) => {
            trace!("point-degenerate triangle against proper triangle");
            let tri = if tr1.is_valid() { tr1 } else { tr2 };
            detail::is_intersect_point_triangle(&pt, tri, &plane)
        }
        (Proper(plane), Segment(seg)) | (Segment(seg), Proper(plane)) => {
            trace!("segment-degenerate triangle against proper triangle");
            let tri = if tr1.is_valid() { tr1 } else { tr2 };
            detail::is_intersect_segment_triangle(&seg, tri, &plane)
        }

        (Point(a), Point(b)) => a == b,
        (Point(pt), Segment(seg)) | (Segment(seg), Point(pt)) => {
            detail::is_intersect_point_segment(&pt, &seg)
        }
        (Segment(s1), Segment(s2)) => detail::is_intersect_segment_segment(&s1, &s2),
    }
}

fn is_intersect_proper<T: Scalar>(
    tr1: &Triangle<T>,
    pl1: &Plane<T>,
    tr2: &Triangle<T>,
    pl2: &Plane<T>,
) -> bool {
    // Both rejections run before the planes are compared, so swapping the
    // arguments cannot change the outcome.
    if detail::is_on_one_side(pl1, tr2) || detail::is_on_one_side(pl2, tr1) {
        return false;
    }

    match intersect_planes(pl1, pl2) {
        PlaneIntersection::Plane(_) => detail::is_intersect_2d(pl1, tr1, tr2),
        PlaneIntersection::None => false,
        PlaneIntersection::Line(line) => {
            detail::is_intersect_moller_haines(tr1, pl1, tr2, pl2, &line)
        }
    }
}
