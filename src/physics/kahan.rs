//! Kahan compensated summation
//!
//! Accumulating thousands of small acceleration contributions in single
//! precision loses low-order bits at every addition. The compensated
//! accumulator tracks the rounding error of each addition and reinjects it
//! into the next one, keeping the running error bounded by a few ulps of
//! the total instead of growing with the number of terms.

use std::ops::{Add, AddAssign, Sub};

/// Compensated running sum over any type with exact-zero subtraction.
///
/// Works for scalars and component-wise for vector types. The underlying
/// arithmetic must satisfy `t - s == 0` exactly when `t == s`; for IEEE
/// floats this requires gradual underflow (subnormals enabled), which is
/// the default on every target this crate runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kahan<T> {
    sum: T,
    error: T,
}

impl<T> Kahan<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    /// Zero-initialized accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator starting from `sum` with no recorded error.
    pub fn with_sum(sum: T) -> Self {
        Self {
            sum,
            error: T::default(),
        }
    }

    /// Add `v`, folding the rounding error of the addition into the error
    /// term for the next call.
    pub fn add(&mut self, v: T) {
        let y = v - self.error;
        let t = self.sum + y;
        self.error = (t - self.sum) - y;
        self.sum = t;
    }

    /// The compensated total.
    pub fn total(&self) -> T {
        self.sum
    }
}

impl<T> AddAssign<T> for Kahan<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    fn add_assign(&mut self, v: T) {
        self.add(v);
    }
}
