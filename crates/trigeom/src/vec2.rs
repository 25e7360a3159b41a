//! Two-dimensional vector used for coplanar triangle tests.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use nalgebra::Vector2;

use crate::tolerance::{Scalar, Tolerance};

/// A 2D vector or point, compared with the current [`Tolerance`].
#[derive(Debug, Clone, Copy)]
pub struct Vec2<T: Scalar>(Vector2<T>);

impl<T: Scalar> Vec2<T> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self(Vector2::new(x, y))
    }

    #[inline]
    pub fn zero() -> Self {
        Self(Vector2::zeros())
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

    /// Dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.0.dot(&rhs.0)
    }

    /// Z component of the 3D cross product of the two vectors lifted to z = 0.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> T {
        self.0.x * rhs.0.y - self.0.y * rhs.0.x
    }

    /// The vector rotated a quarter turn clockwise: `(y, -x)`.
    #[inline]
    pub fn perp(&self) -> Self {
        Self::new(self.0.y, -self.0.x)
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

    /// Unit vector in the same direction; no-op when the length is about 0 or 1.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if Tolerance::is_zero(len) || Tolerance::is_equal(len, nalgebra::one()) {
            *self
        } else {
            *self / len
        }
    }

    /// Cross product within tolerance of zero. The zero vector is parallel to everything.
    pub fn is_par(&self, rhs: &Self) -> bool {
        Tolerance::is_zero(self.cross(rhs))
    }

    /// Dot product within tolerance of zero.
    pub fn is_perp(&self, rhs: &Self) -> bool {
        Tolerance::is_zero(self.dot(rhs))
    }

    /// Componentwise equality within tolerance.
    pub fn is_equal(&self, rhs: &Self) -> bool {
        Tolerance::is_equal(self.0.x, rhs.0.x) && Tolerance::is_equal(self.0.y, rhs.0.y)
    }
}

impl<T: Scalar> PartialEq for Vec2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Scalar> Index<usize> for Vec2<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index % 2]
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self(self.0 * rhs)
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self(self.0 / rhs)
    }
}

impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl<T: Scalar> From<Vector2<T>> for Vec2<T> {
    fn from(v: Vector2<T>) -> Self {
        Self(v)
    }
}

impl<T: Scalar> From<Vec2<T>> for Vector2<T> {
    fn from(v: Vec2<T>) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perp_is_orthogonal() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.perp(), Vec2::new(4.0, -3.0));
        assert!(v.is_perp(&v.perp()));
        assert!(!v.is_par(&v.perp()));
    }

    #[test]
    fn cross_sign_follows_winding() {
        let x = Vec2::new(1.0, 0.0);
        let y = Vec2::new(0.0, 1.0);
        assert_relative_eq!(x.cross(&y), 1.0);
        assert_relative_eq!(y.cross(&x), -1.0);
        assert!(x.is_par(&(x * -3.0)));
    }

    #[test]
    fn normalize() {
        let v = Vec2::new(0.0, 2.0);
        assert_eq!(v.normalize(), Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::<f32>::zero().normalize(), Vec2::zero());
        assert_relative_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn index_wraps() {
        let v = Vec2::new(7.0, 8.0);
        assert_eq!(v[0], 7.0);
        assert_eq!(v[1], 8.0);
        assert_eq!(v[2], 7.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(-a / 2.0, Vec2::new(-0.5, -1.0));
    }
}
