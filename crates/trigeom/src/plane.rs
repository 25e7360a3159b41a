//! Plane representation and point classification.

use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::line::Line;
use crate::tolerance::{Scalar, Tolerance};
use crate::vec3::Vec3;

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Positive side of the normal
    Front,
    /// Negative side of the normal
    Back,
    /// Within tolerance of the plane
    OnPlane,
}

/// A triangle's position relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Every vertex strictly in front of the plane
    Front,
    /// Every vertex strictly behind the plane
    Back,
    /// Every vertex on the plane
    Coplanar,
    /// Anything else, including a triangle touching the plane from one side
    Spanning,
}

/// A plane `{P : n · P = d}` with `|n| = 1`.
///
/// Planes are only built through the validated factories, which reject
/// inputs that would produce a zero normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane<T: Scalar> {
    normal: Vec3<T>,
    dist: T,
}

impl<T: Scalar> Plane<T> {
    /// Plane through three points, normal `(p2 - p1) × (p3 - p1)`.
    pub fn from_three_points(p1: Vec3<T>, p2: Vec3<T>, p3: Vec3<T>) -> Result<Self> {
        Self::from_parametric(p1, p2 - p1, p3 - p1)
    }

    /// Plane `org + d1 * u + d2 * v`.
    ///
    /// Fails with [`ConstructionError::DegenerateNormal`] when `d1 ∥ d2`.
    pub fn from_parametric(org: Vec3<T>, d1: Vec3<T>, d2: Vec3<T>) -> Result<Self> {
        if d1.is_par(&d2) {
            return Err(ConstructionError::DegenerateNormal.into());
        }
        let normal = unit(d1.cross(&d2));
        Ok(Self {
            normal,
            dist: normal.dot(&org),
        })
    }

    /// Plane through `point` perpendicular to `normal`, which need not be unit.
    ///
    /// Fails with [`ConstructionError::DegenerateNormal`] for a zero normal.
    pub fn from_normal_and_point(normal: Vec3<T>, point: Vec3<T>) -> Result<Self> {
        if normal.is_zero() {
            return Err(ConstructionError::DegenerateNormal.into());
        }
        let normal = unit(normal);
        Ok(Self {
            normal,
            dist: normal.dot(&point),
        })
    }

    /// Plane with the given normal direction and distance.
    ///
    /// `dist` is taken as-is: it is the distance along the *normalized*
    /// normal, whatever the length of `normal`.
    pub fn from_normal_and_dist(normal: Vec3<T>, dist: T) -> Result<Self> {
        if normal.is_zero() {
            return Err(ConstructionError::DegenerateNormal.into());
        }
        Ok(Self {
            normal: unit(normal),
            dist,
        })
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> Vec3<T> {
        self.normal
    }

    /// Signed distance from the origin along the normal.
    #[inline]
    pub fn dist(&self) -> T {
        self.dist
    }

    /// `n · point - d`: positive in front, negative behind.
    #[inline]
    pub fn signed_distance(&self, point: &Vec3<T>) -> T {
        self.normal.dot(point) - self.dist
    }

    /// Side of the plane `point` lies on, within tolerance.
    pub fn classify_point(&self, point: &Vec3<T>) -> PlaneSide {
        let dist = self.signed_distance(point);
        if Tolerance::is_zero(dist) {
            PlaneSide::OnPlane
        } else if dist > nalgebra::zero() {
            PlaneSide::Front
        } else {
            PlaneSide::Back
        }
    }

    /// `point` satisfies the plane equation within tolerance.
    pub fn belongs(&self, point: &Vec3<T>) -> bool {
        Tolerance::is_equal(self.normal.dot(point), self.dist)
    }

    /// The whole line lies in the plane.
    pub fn belongs_line(&self, line: &Line<T>) -> bool {
        self.normal.is_perp(&line.dir()) && self.belongs(&line.org())
    }

    /// Same point set. A plane equals its twin with negated normal and
    /// negated distance.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.normal.is_par(&other.normal)
            && (self.normal * self.dist).is_equal(&(other.normal * other.dist))
    }

    /// Normals are parallel or antiparallel. A plane is parallel to itself.
    pub fn is_par(&self, other: &Self) -> bool {
        self.normal.is_par(&other.normal)
    }
}

/// Divides by the length without the near-unit shortcut of
/// [`Vec3::normalize`]; callers have excluded the zero vector.
fn unit<T: Scalar>(v: Vec3<T>) -> Vec3<T> {
    v / v.length()
}

impl<T: Scalar> PartialEq for Plane<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Scalar> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} . P = {}", self.normal, self.dist)
    }
}
