//! Tolerance-aware comparison primitives.
//!
//! Every equality, ordering-at-the-boundary and clamp test in the kernel goes
//! through this module. The epsilon is configured once per process with
//! [`Tolerance::install`] and is read-only afterwards.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::scalar::{from_f64, Real};

static TOLERANCE: OnceLock<Tolerance> = OnceLock::new();

/// Process-wide comparison epsilon, one per float width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Epsilon used for `f32` elements.
    pub single: f32,
    /// Epsilon used for `f64` elements.
    pub double: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            single: 1e-5,
            double: 1e-9,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance configuration.
    #[must_use]
    pub fn new(single: f32, double: f64) -> Self {
        Self { single, double }
    }

    /// Installs this configuration for the rest of the process.
    ///
    /// Must run before the first comparison; once any comparison has read the
    /// tolerance, the default is frozen in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEpsilon`] if either epsilon is not
    /// finite and strictly between 0 and 1, and
    /// [`ConfigError::AlreadyInstalled`] if a tolerance is already in effect.
    pub fn install(self) -> Result<()> {
        validate_epsilon(f64::from(self.single))?;
        validate_epsilon(self.double)?;
        TOLERANCE
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        debug!(single = self.single, double = self.double, "tolerance installed");
        Ok(())
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn current() -> &'static Tolerance {
        TOLERANCE.get_or_init(Tolerance::default)
    }
}

fn validate_epsilon(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidEpsilon { value }.into())
    }
}

/// `|x - y| < tolerance`.
#[must_use]
pub fn approx_eq<T: Real>(x: T, y: T) -> bool {
    (x - y).abs() < T::tolerance()
}

/// `|x - y| < eps`.
#[must_use]
pub fn approx_eq_eps<T: Real>(x: T, y: T, eps: T) -> bool {
    (x - y).abs() < eps
}

/// `x <= y`, treating values within tolerance as equal.
#[must_use]
pub fn approx_le<T: Real>(x: T, y: T) -> bool {
    approx_eq(x, y) || x < y
}

/// `x >= y`, treating values within tolerance as equal.
#[must_use]
pub fn approx_ge<T: Real>(x: T, y: T) -> bool {
    approx_eq(x, y) || x > y
}

/// Returns `true` if `a <= x <= b` within tolerance.
#[must_use]
pub fn in_range<T: Real>(x: T, a: T, b: T) -> bool {
    approx_le(a, x) && approx_le(x, b)
}

/// Saturates `x` to `[lo, hi]`.
#[must_use]
pub fn clamp<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// `max(0, x)`.
#[must_use]
pub fn max0<T: Real>(x: T) -> T {
    x.max(T::zero())
}

/// `max(tolerance, x)`.
#[must_use]
pub fn maxtol<T: Real>(x: T) -> T {
    x.max(T::tolerance())
}

/// `min(1 - tolerance, x)`.
#[must_use]
pub fn mintol<T: Real>(x: T) -> T {
    x.min(T::one_minus_tolerance())
}

/// Degrees to radians.
#[must_use]
pub fn radians<T: Real>(deg: T) -> T {
    T::PI() / from_f64(180.0) * deg
}

/// Radians to degrees.
#[must_use]
pub fn degrees<T: Real>(rad: T) -> T {
    from_f64::<T>(180.0) / T::PI() * rad
}

/// Linear interpolation `(1 - t) * a + t * b`.
pub trait Lerp<T>: Sized {
    /// Interpolates between `a` (at `t = 0`) and `b` (at `t = 1`).
    #[must_use]
    fn lerp(t: T, a: Self, b: Self) -> Self;
}

impl Lerp<f32> for f32 {
    fn lerp(t: f32, a: f32, b: f32) -> f32 {
        (1.0 - t) * a + t * b
    }
}

impl Lerp<f64> for f64 {
    fn lerp(t: f64, a: f64, b: f64) -> f64 {
        (1.0 - t) * a + t * b
    }
}

/// Interpolates between `a` and `b`; see [`Lerp`].
#[must_use]
pub fn lerp<T, V: Lerp<T>>(t: T, a: V, b: V) -> V {
    V::lerp(t, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_is_strict_below_epsilon() {
        assert!(approx_eq(1.0_f64, 1.0 + 1e-10));
        assert!(!approx_eq(1.0_f64, 1.0 + 1e-8));
        assert!(approx_eq_eps(1.0_f64, 1.05, 0.1));
        assert!(!approx_eq_eps(1.0_f64, 1.1, 0.1 - 1e-12));
    }

    #[test]
    fn boundaries_satisfy_both_orderings() {
        let x = 2.0_f64;
        let y = 2.0 + 1e-12;
        assert!(approx_le(x, y));
        assert!(approx_ge(x, y));
        assert!(approx_ge(y, x));
        assert!(!approx_ge(1.0_f64, 2.0));
        assert!(in_range(1.0_f64, 1.0, 3.0));
        assert!(!in_range(3.5_f64, 1.0, 3.0));
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1, 0, 3), 0);
        assert!((clamp(0.25_f64, 0.0, 1.0) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert!((lerp(0.0_f64, 3.0_f64, 7.0) - 3.0).abs() < f64::EPSILON);
        assert!((lerp(1.0_f64, 3.0_f64, 7.0) - 7.0).abs() < f64::EPSILON);
        assert!((lerp(0.25_f32, 0.0_f32, 4.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn angle_conversions() {
        assert!(approx_eq(radians(180.0_f64), std::f64::consts::PI));
        assert!(approx_eq(degrees(std::f64::consts::FRAC_PI_2), 90.0_f64));
    }

    #[test]
    fn tolerance_clamps() {
        assert!(approx_eq(max0(-3.0_f64), 0.0));
        assert!(maxtol(0.0_f64) > 0.0);
        assert!(mintol(1.0_f64) < 1.0);
    }

    #[test]
    fn invalid_epsilon_is_rejected() {
        assert!(Tolerance::new(0.0, 1e-9).install().is_err());
        assert!(Tolerance::new(1e-5, f64::NAN).install().is_err());
        assert!(Tolerance::new(1e-5, 1.5).install().is_err());
    }

    #[test]
    fn second_install_is_rejected() {
        // Reading freezes the configuration in effect.
        let current = *Tolerance::current();
        let err = current.install();
        assert!(err.is_err());
        assert_eq!(*Tolerance::current(), current);
    }
}
