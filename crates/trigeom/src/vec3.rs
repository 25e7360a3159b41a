//! Three-dimensional vector with tolerance-aware comparison.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use nalgebra::{Point3, Vector3};

use crate::tolerance::{Scalar, Tolerance};

/// A 3D vector or point.
///
/// Thin wrapper around [`nalgebra::Vector3`]. Unlike the nalgebra type,
/// `==` compares componentwise against the current [`Tolerance`] threshold.
#[derive(Debug, Clone, Copy)]
pub struct Vec3<T: Scalar>(Vector3<T>);

impl<T: Scalar> Vec3<T> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// A vector with every coordinate equal to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }

    /// First component.
    #[inline]
    pub fn x(&self) -> T {
        self.0.x
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> T {
        self.0.y
    }

    /// Third component.
    #[inline]
    pub fn z(&self) -> T {
        self.0.z
    }

    /// Borrows the underlying nalgebra vector.
    #[inline]
    pub fn as_vector(&self) -> &Vector3<T> {
        &self.0
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.0.dot(&rhs.0)
    }

    /// Cross product, `self × rhs`.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self(self.0.cross(&rhs.0))
    }

    /// Scalar triple product `a · (b × c)`.
    #[inline]
    pub fn triple(a: &Self, b: &Self, c: &Self) -> T {
        a.dot(&b.cross(c))
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.0.norm()
    }

    /// Squared length.
    #[inline]
    pub fn length2(&self) -> T {
        self.0.norm_squared()
    }

    /// Scales the vector to unit length.
    ///
    /// Vectors whose length is already approximately 0 or 1 are returned
    /// unchanged.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if Tolerance::is_zero(len) || Tolerance::is_equal(len, nalgebra::one()) {
            *self
        } else {
            *self / len
        }
    }

    /// Every component is within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| Tolerance::is_zero(c))
    }

    /// Parallel or antiparallel. The zero vector is parallel to everything.
    pub fn is_par(&self, rhs: &Self) -> bool {
        self.cross(rhs).is_zero()
    }

    /// Dot product within tolerance of zero.
    pub fn is_perp(&self, rhs: &Self) -> bool {
        Tolerance::is_zero(self.dot(rhs))
    }

    /// Componentwise comparison against the current threshold.
    pub fn is_equal(&self, rhs: &Self) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(&a, &b)| Tolerance::is_equal(a, b))
    }
}

impl<T: Scalar> PartialEq for Vec3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

/// Coordinate access; the index wraps around, so `v[3] == v[0]`.
impl<T: Scalar> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index % 3]
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self(self.0 * rhs)
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self(self.0 / rhs)
    }
}

impl<T: Scalar> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vec3<T> {
    fn from(v: Vector3<T>) -> Self {
        Self(v)
    }
}

impl<T: Scalar> From<Point3<T>> for Vec3<T> {
    fn from(p: Point3<T>) -> Self {
        Self(p.coords)
    }
}

impl<T: Scalar> From<Vec3<T>> for Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        v.0
    }
}

impl<T: Scalar> From<Vec3<T>> for Point3<T> {
    fn from(v: Vec3<T>) -> Self {
        Point3::from(v.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn dot_cross_triple() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        assert_relative_eq!(x.dot(&y), 0.0);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&x), -z);
        assert_relative_eq!(Vec3::triple(&x, &y, &z), 1.0);
        assert_relative_eq!(Vec3::triple(&x, &x, &z), 0.0);
    }

    #[test]
    fn length_and_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.length2(), 25.0);
        assert_relative_eq!(v.normalize().length(), 1.0);
        assert_eq!(v.normalize(), Vec3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn normalize_leaves_zero_and_unit_vectors_alone() {
        let zero = Vec3::<f64>::zero();
        assert_eq!(zero.normalize(), zero);

        let unit = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(unit.normalize(), unit);
    }

    #[test]
    fn parallel_and_perpendicular() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        assert!(a.is_par(&Vec3::new(-2.0, -2.0, 0.0)));
        assert!(!a.is_par(&Vec3::new(1.0, 0.0, 0.0)));
        assert!(a.is_par(&Vec3::zero()));
        assert!(a.is_perp(&Vec3::new(1.0, -1.0, 5.0)));
        assert!(!a.is_perp(&Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn equality_uses_threshold() {
        let a = Vec3::new(1.0f32, 2.0, 3.0);
        let near = Vec3::new(1.0 + 1e-5, 2.0, 3.0);
        let far = Vec3::new(1.0 + 1e-2, 2.0, 3.0);
        assert_eq!(a, near);
        assert_ne!(a, far);
    }

    #[test]
    fn index_wraps() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v[3], 1.0);
        assert_eq!(v[5], 3.0);
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v: Vec3<f64> = p.into();
        assert_eq!(Point3::from(v), p);
        assert_eq!(Vector3::from(v), p.coords);
    }

    #[test]
    fn display() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }
}
