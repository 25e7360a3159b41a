//! Threshold-based scalar comparison.
//!
//! Every predicate in the crate (vector equality, parallelism, point-on-plane,
//! same-side tests) compares floating point values through [`Tolerance`].
//! The threshold lives in a thread-local slot, one per scalar type, so a test
//! or a worker thread that tightens it never affects another thread.

use std::cell::Cell;
use std::marker::PhantomData;
use std::thread::LocalKey;

use nalgebra::RealField;

/// Floating point type usable for coordinates.
pub trait Scalar: RealField + Copy {
    /// Threshold every thread starts with: `1e3 * EPSILON`.
    const DEFAULT_THRESHOLD: Self;

    #[doc(hidden)]
    fn threshold_slot() -> &'static LocalKey<Cell<Self>>;
}

thread_local! {
    static F32_THRESHOLD: Cell<f32> = const { Cell::new(<f32 as Scalar>::DEFAULT_THRESHOLD) };
    static F64_THRESHOLD: Cell<f64> = const { Cell::new(<f64 as Scalar>::DEFAULT_THRESHOLD) };
}

impl Scalar for f32 {
    const DEFAULT_THRESHOLD: f32 = 1e3 * f32::EPSILON;

    fn threshold_slot() -> &'static LocalKey<Cell<f32>> {
        &F32_THRESHOLD
    }
}

impl Scalar for f64 {
    const DEFAULT_THRESHOLD: f64 = 1e3 * f64::EPSILON;

    fn threshold_slot() -> &'static LocalKey<Cell<f64>> {
        &F64_THRESHOLD
    }
}

/// Comparison policy for scalars of type `T`.
///
/// Two values are equal when `|a - b| < threshold`. The comparison is strict:
/// values exactly one threshold apart are *not* equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tolerance<T>(PhantomData<T>);

impl<T: Scalar> Tolerance<T> {
    /// Current threshold of the calling thread.
    #[inline]
    pub fn get() -> T {
        T::threshold_slot().with(Cell::get)
    }

    /// Replaces the threshold of the calling thread.
    #[inline]
    pub fn set(threshold: T) {
        T::threshold_slot().with(|slot| slot.set(threshold));
    }

    /// Multiplies the current threshold by `factor`.
    pub fn scale(factor: T) {
        Self::set(Self::get() * factor);
    }

    /// Restores [`Scalar::DEFAULT_THRESHOLD`].
    pub fn reset() {
        Self::set(T::DEFAULT_THRESHOLD);
    }

    /// Sets `threshold` until the returned guard is dropped.
    #[must_use = "the previous threshold is restored when the guard is dropped"]
    pub fn scoped(threshold: T) -> ToleranceGuard<T> {
        let previous = Self::get();
        Self::set(threshold);
        ToleranceGuard { previous }
    }

    /// `|lhs - rhs| < threshold`. Values exactly the threshold apart differ.
    #[inline]
    pub fn is_equal(lhs: T, rhs: T) -> bool {
        abs(lhs - rhs) < Self::get()
    }

    /// `|value| < threshold`.
    #[inline]
    pub fn is_zero(value: T) -> bool {
        Self::is_equal(value, nalgebra::zero())
    }
}

/// Restores the previous threshold of its scalar type on drop.
#[derive(Debug)]
pub struct ToleranceGuard<T: Scalar> {
    previous: T,
}

impl<T: Scalar> Drop for ToleranceGuard<T> {
    fn drop(&mut self) {
        Tolerance::<T>::set(self.previous);
    }
}

/// `|value|` without going through `Signed` or `ComplexField`, which both
/// provide an `abs` for `RealField` types.
#[inline]
pub(crate) fn abs<T: Scalar>(value: T) -> T {
    if value < nalgebra::zero() { -value } else { value }
}
