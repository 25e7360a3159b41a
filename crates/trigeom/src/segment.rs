//! Closed line segments, used for segment-degenerate triangles.

use std::fmt;

use crate::error::Result;
use crate::line::Line;
use crate::tolerance::{Scalar, Tolerance};
use crate::vec3::Vec3;

/// The closed segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar> {
    start: Vec3<T>,
    end: Vec3<T>,
}

impl<T: Scalar> Segment<T> {
    /// Creates a segment from `start` to `end`. Equal endpoints are allowed.
    #[inline]
    pub fn new(start: Vec3<T>, end: Vec3<T>) -> Self {
        Self { start, end }
    }

    /// First endpoint.
    #[inline]
    pub fn start(&self) -> Vec3<T> {
        self.start
    }

    /// Second endpoint.
    #[inline]
    pub fn end(&self) -> Vec3<T> {
        self.end
    }

    /// `end - start`.
    #[inline]
    pub fn direction(&self) -> Vec3<T> {
        self.end - self.start
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> T {
        self.direction().length()
    }

    /// Both endpoints coincide within tolerance.
    pub fn is_point(&self) -> bool {
        self.direction().is_zero()
    }

    /// Supporting line; fails if the endpoints coincide.
    pub fn line(&self) -> Result<Line<T>> {
        Line::from_two_points(self.start, self.end)
    }

    /// Signed distance of the projection of `point` from `start`, measured
    /// along the segment.
    fn project(&self, point: &Vec3<T>) -> T {
        let dir = self.direction();
        (*point - self.start).dot(&dir) / dir.length()
    }

    /// `point` lies on the segment, endpoints included.
    pub fn contains(&self, point: &Vec3<T>) -> bool {
        if self.is_point() {
            return self.start == *point;
        }
        let dir = self.direction();
        if !dir.cross(&(*point - self.start)).is_zero() {
            return false;
        }
        let s = self.project(point);
        let tol = Tolerance::<T>::get();
        s > -tol && s < self.length() + tol
    }

    /// Both segments lie on a common line and share at least one point.
    ///
    /// Each segment is projected onto the first one's direction and the two
    /// sorted intervals are compared.
    pub(crate) fn overlaps_collinear(&self, other: &Self) -> bool {
        let (a0, a1) = sorted(nalgebra::zero(), self.length());
        let (b0, b1) = sorted(self.project(&other.start), self.project(&other.end));
        let tol = Tolerance::<T>::get();
        a0 < b1 + tol && b0 < a1 + tol
    }
}

fn sorted<T: Scalar>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

impl<T: Scalar> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
