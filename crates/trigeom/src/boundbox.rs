//! Axis-aligned bounding boxes.

use std::fmt;

use crate::error::{ArgumentError, ConstructionError, Result};
use crate::tolerance::{Scalar, Tolerance};
use crate::vec3::Vec3;

/// Coordinate axis. `None` marks "no axis", e.g. at a kd-tree leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    None,
}

impl Axis {
    /// The three concrete axes in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Coordinate index of the axis, or [`ArgumentError::NoneAxis`].
    pub fn index(self) -> Result<usize> {
        match self {
            Axis::X => Ok(0),
            Axis::Y => Ok(1),
            Axis::Z => Ok(2),
            Axis::None => Err(ArgumentError::NoneAxis.into()),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::None => "none",
        };
        f.write_str(name)
    }
}

/// Per-axis `[min, max]` box with `min <= max` on every axis.
#[derive(Debug, Clone, Copy)]
pub struct BoundBox<T: Scalar> {
    min: Vec3<T>,
    max: Vec3<T>,
}

impl<T: Scalar> BoundBox<T> {
    /// Fails with [`ConstructionError::InvertedBounds`] if `min > max` on any axis.
    pub fn new(min: Vec3<T>, max: Vec3<T>) -> Result<Self> {
        if (0..3).any(|i| min[i] > max[i]) {
            return Err(ConstructionError::InvertedBounds.into());
        }
        Ok(Self { min, max })
    }

    /// Smallest box containing every point. `None` for an empty input.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec3<T>>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let mut bb = Self {
            min: first,
            max: first,
        };
        for p in points {
            bb = bb.expanded(p);
        }
        Some(bb)
    }

    fn expanded(&self, p: &Vec3<T>) -> Self {
        Self {
            min: Vec3::new(
                min(self.min.x(), p.x()),
                min(self.min.y(), p.y()),
                min(self.min.z(), p.z()),
            ),
            max: Vec3::new(
                max(self.max.x(), p.x()),
                max(self.max.y(), p.y()),
                max(self.max.z(), p.z()),
            ),
        }
    }

    /// Box around a triangle's corners grown by the current threshold, so
    /// that triangles touching within tolerance always have overlapping boxes.
    pub(crate) fn around_triangle(vertices: &[Vec3<T>; 3]) -> Self {
        let [a, b, c] = vertices;
        Self { min: *a, max: *a }
            .expanded(b)
            .expanded(c)
            .inflate(Tolerance::<T>::get())
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        self.expanded(&other.min).expanded(&other.max)
    }

    /// The box grown by `margin` on every side.
    pub fn inflate(&self, margin: T) -> Self {
        let m = Vec3::splat(margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Corner with the smallest coordinate on every axis.
    #[inline]
    pub fn min_corner(&self) -> Vec3<T> {
        self.min
    }

    /// Corner with the largest coordinate on every axis.
    #[inline]
    pub fn max_corner(&self) -> Vec3<T> {
        self.max
    }

    /// Lower bound on `axis`.
    pub fn min(&self, axis: Axis) -> Result<T> {
        Ok(self.min[axis.index()?])
    }

    /// Upper bound on `axis`.
    pub fn max(&self, axis: Axis) -> Result<T> {
        Ok(self.max[axis.index()?])
    }

    /// Size of the box along `axis`.
    pub fn extent(&self, axis: Axis) -> Result<T> {
        let i = axis.index()?;
        Ok(self.max[i] - self.min[i])
    }

    /// Midpoint of the box along `axis`.
    pub fn center(&self, axis: Axis) -> Result<T> {
        let i = axis.index()?;
        Ok((self.min[i] + self.max[i]) / nalgebra::convert::<f64, T>(2.0))
    }

    /// Closed boxes share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// This box lies entirely inside `other`.
    pub fn belongs_to(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] >= other.min[i] && self.max[i] <= other.max[i])
    }

    /// Axis of greatest extent.
    ///
    /// Axes are scanned X, Y, Z and an axis replaces the current pick unless
    /// its extent is strictly smaller, so ties resolve to the later axis.
    pub fn max_dim(&self) -> Axis {
        let mut best = Axis::X;
        let mut best_extent = self.max.x() - self.min.x();
        for (i, axis) in Axis::ALL.into_iter().enumerate().skip(1) {
            let extent = self.max[i] - self.min[i];
            if extent >= best_extent {
                best = axis;
                best_extent = extent;
            }
        }
        best
    }
}

impl<T: Scalar> PartialEq for BoundBox<T> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<T: Scalar> fmt::Display for BoundBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}

#[inline]
fn min<T: Scalar>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn max<T: Scalar>(a: T, b: T) -> T {
    if b > a { b } else { a }
}
