//! Element types accepted by the vector and matrix types.
//!
//! [`Scalar`] covers every numeric element (integers and floats) and decides
//! what "equal" means for that element. [`Real`] adds the floating-point
//! surface: the configured tolerance and the reciprocal sentinel.

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

use num_traits::{Float, FloatConst, Num, NumCast};

use super::matrix::mul_outer;
use super::tolerance::Tolerance;

/// Numeric element of a [`Vector`](super::Vector) or
/// [`SquareMatrix`](super::SquareMatrix).
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Num
    + NumCast
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Element equality: exact for integers, tolerance-based for floats.
    fn tol_eq(self, other: Self) -> bool;

    /// Returns `true` if the value may not be used as a divisor.
    fn is_negligible(self) -> bool {
        self.tol_eq(Self::zero())
    }

    /// Row-major 4x4 product. Element types with a vectorized path override
    /// this; everyone else gets the portable sum of outer products.
    #[must_use]
    fn mul_matrix4(lhs: &[[Self; 4]; 4], rhs: &[[Self; 4]; 4]) -> [[Self; 4]; 4] {
        mul_outer(lhs, rhs)
    }
}

/// Floating-point element.
pub trait Real: Scalar + Float + FloatConst {
    /// The process-wide comparison epsilon for this float width.
    fn tolerance() -> Self;

    /// `1 - tolerance()`.
    #[must_use]
    fn one_minus_tolerance() -> Self {
        Self::one() - Self::tolerance()
    }

    /// Stand-in for `1 / x` when `x` is within tolerance of zero.
    #[must_use]
    fn reciprocal_sentinel() -> Self {
        from_f64(2e9)
    }
}

/// Converts an `f64` literal into any [`Real`].
pub(crate) fn from_f64<T: Real>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}

macro_rules! impl_integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn tol_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_integer_scalar!(i32, i64);

impl Scalar for f32 {
    fn tol_eq(self, other: Self) -> bool {
        (self - other).abs() < Self::tolerance()
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "sse"))]
    fn mul_matrix4(lhs: &[[Self; 4]; 4], rhs: &[[Self; 4]; 4]) -> [[Self; 4]; 4] {
        super::simd::mul4_f32(lhs, rhs)
    }
}

impl Scalar for f64 {
    fn tol_eq(self, other: Self) -> bool {
        (self - other).abs() < Self::tolerance()
    }
}

impl Real for f32 {
    fn tolerance() -> Self {
        Tolerance::current().single
    }
}

impl Real for f64 {
    fn tolerance() -> Self {
        Tolerance::current().double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_compare_exactly() {
        assert!(3_i32.tol_eq(3));
        assert!(!3_i64.tol_eq(4));
        assert!(0_i32.is_negligible());
        assert!(!1_i32.is_negligible());
    }

    #[test]
    fn floats_compare_within_tolerance() {
        assert!(1.0_f64.tol_eq(1.0 + 1e-12));
        assert!(!1.0_f64.tol_eq(1.001));
        assert!(1.0_f32.tol_eq(1.0 + 1e-7));
        assert!(1e-12_f64.is_negligible());
    }

    #[test]
    fn sentinel_and_complement() {
        assert!((f64::reciprocal_sentinel() - 2e9).abs() < 1.0);
        assert!((f64::one_minus_tolerance() + f64::tolerance() - 1.0).abs() < 1e-15);
    }
}
