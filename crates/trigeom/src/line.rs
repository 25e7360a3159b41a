//! Parametric line `org + dir * t`.

use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::tolerance::{Scalar, Tolerance};
use crate::vec3::Vec3;

/// How two lines are positioned relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRelation {
    /// Both lines describe the same point set.
    Coincident,
    /// Directions are parallel but the lines are distinct.
    Parallel,
    /// Not parallel and not coplanar.
    Skew,
    /// Coplanar and not parallel: exactly one common point.
    Crossing,
}

/// An infinite line through `org` along `dir`.
///
/// `dir` is never (approximately) zero; [`Line::new`] rejects it.
#[derive(Debug, Clone, Copy)]
pub struct Line<T: Scalar> {
    org: Vec3<T>,
    dir: Vec3<T>,
}

impl<T: Scalar> Line<T> {
    /// Creates a line, failing with [`ConstructionError::ZeroDirection`] when
    /// `dir` is within tolerance of the zero vector.
    pub fn new(org: Vec3<T>, dir: Vec3<T>) -> Result<Self> {
        if dir.is_zero() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        Ok(Self { org, dir })
    }

    /// Line through `p1` and `p2`, directed from `p1` to `p2`.
    pub fn from_two_points(p1: Vec3<T>, p2: Vec3<T>) -> Result<Self> {
        let dir = p2 - p1;
        if dir.is_zero() {
            return Err(ConstructionError::CoincidentPoints.into());
        }
        Ok(Self { org: p1, dir })
    }

    /// Skips validation; `dir` must already be known to be non-zero.
    pub(crate) fn from_parts(org: Vec3<T>, dir: Vec3<T>) -> Self {
        Self { org, dir }
    }

    /// Point the line was built through.
    #[inline]
    pub fn org(&self) -> Vec3<T> {
        self.org
    }

    /// Direction, as given; not normalized.
    #[inline]
    pub fn dir(&self) -> Vec3<T> {
        self.dir
    }

    /// `org + dir * t`.
    #[inline]
    pub fn get_point(&self, t: T) -> Vec3<T> {
        self.org + self.dir * t
    }

    /// `point` lies on the line within tolerance.
    pub fn belongs(&self, point: &Vec3<T>) -> bool {
        self.dir.cross(&(*point - self.org)).is_zero()
    }

    /// Same point set, regardless of origin or direction sense.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.belongs(&other.org) && self.dir.is_par(&other.dir)
    }

    /// Directions are parallel. Coincident lines count as parallel.
    pub fn is_par(&self, other: &Self) -> bool {
        self.dir.is_par(&other.dir)
    }

    /// The lines do not lie in a common plane.
    ///
    /// Parallel lines always report `false`; use [`Line::relation`] to tell
    /// them apart from crossing lines.
    pub fn is_skew(&self, other: &Self) -> bool {
        let triple = Vec3::triple(&(other.org - self.org), &self.dir, &other.dir);
        !Tolerance::is_zero(triple)
    }

    /// How `self` and `other` are placed relative to each other.
    pub fn relation(&self, other: &Self) -> LineRelation {
        if self.is_par(other) {
            if self.belongs(&other.org) {
                LineRelation::Coincident
            } else {
                LineRelation::Parallel
            }
        } else if self.is_skew(other) {
            LineRelation::Skew
        } else {
            LineRelation::Crossing
        }
    }
}

impl<T: Scalar> PartialEq for Line<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Scalar> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} * t", self.org, self.dir)
    }
}
