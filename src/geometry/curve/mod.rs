mod bezier;
mod elliptical_arc;

pub use bezier::{cubic_curve, evaluate_polynomial_curve, quadratic_curve, BezierCurve};
pub use elliptical_arc::{evaluate_elliptical_arc, EllipticalArc};

use crate::error::Result;
use crate::math::Real;

/// A parametric curve `t -> point`.
///
/// The nominal domain is `[0, 1]`, but implementations do not clamp `t`;
/// values outside it extrapolate where the curve's formula allows.
pub trait Curve {
    /// Element type of the parameter and the coordinates.
    type Scalar: Real;
    /// Point type produced by evaluation.
    type Point: Copy;

    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated at `t`.
    fn evaluate(&self, t: Self::Scalar) -> Result<Self::Point>;

    /// The point at `t = 0`.
    ///
    /// # Errors
    ///
    /// Same as [`Curve::evaluate`].
    fn start_point(&self) -> Result<Self::Point> {
        self.evaluate(<Self::Scalar as num_traits::Zero>::zero())
    }

    /// The point at `t = 1`.
    ///
    /// # Errors
    ///
    /// Same as [`Curve::evaluate`].
    fn end_point(&self) -> Result<Self::Point> {
        self.evaluate(<Self::Scalar as num_traits::One>::one())
    }
}
