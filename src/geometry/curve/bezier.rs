use crate::error::{CurveError, Result};
use crate::math::{Lerp, Point, Real};

use super::Curve;

/// Reduces `points` in place by repeated pairwise interpolation and returns
/// the single remaining point. `points` must not be empty.
fn de_casteljau<T: Copy, P: Lerp<T> + Copy>(points: &mut [P], t: T) -> P {
    for len in (1..points.len()).rev() {
        for i in 0..len {
            points[i] = P::lerp(t, points[i], points[i + 1]);
        }
    }
    points[0]
}

/// Evaluates the polynomial (Bezier) curve with the given control points at
/// `t`.
///
/// A curve of `k` points has degree `k - 1`. `t` is not clamped, so values
/// outside `[0, 1]` extrapolate. At `t = 0` and `t = 1` the result is exactly
/// the first and last control point.
///
/// # Errors
///
/// Returns [`CurveError::TooFewControlPoints`] if fewer than two points are
/// given.
pub fn evaluate_polynomial_curve<T, P>(points: &[P], t: T) -> Result<P>
where
    T: Copy,
    P: Lerp<T> + Copy,
{
    if points.len() < 2 {
        return Err(CurveError::TooFewControlPoints {
            count: points.len(),
        }
        .into());
    }
    let mut scratch = points.to_vec();
    Ok(de_casteljau(&mut scratch, t))
}

/// Degree-2 curve on a stack buffer; identical to
/// [`evaluate_polynomial_curve`] on the same three points.
#[must_use]
pub fn quadratic_curve<T, P>(p0: P, p1: P, p2: P, t: T) -> P
where
    T: Copy,
    P: Lerp<T> + Copy,
{
    de_casteljau(&mut [p0, p1, p2], t)
}

/// Degree-3 curve on a stack buffer; identical to
/// [`evaluate_polynomial_curve`] on the same four points.
#[must_use]
pub fn cubic_curve<T, P>(p0: P, p1: P, p2: P, p3: P, t: T) -> P
where
    T: Copy,
    P: Lerp<T> + Copy,
{
    de_casteljau(&mut [p0, p1, p2, p3], t)
}

/// A Bezier curve in `N` dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<T: Real, const N: usize> {
    control_points: Vec<Point<T, N>>,
}

impl<T: Real, const N: usize> BezierCurve<T, N> {
    /// Creates a curve from its control points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::TooFewControlPoints`] if fewer than two points are
    /// given.
    pub fn new(control_points: Vec<Point<T, N>>) -> Result<Self> {
        if control_points.len() < 2 {
            return Err(CurveError::TooFewControlPoints {
                count: control_points.len(),
            }
            .into());
        }
        Ok(Self { control_points })
    }

    /// Returns the degree, one less than the number of control points.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point<T, N>] {
        &self.control_points
    }
}

impl<T: Real, const N: usize> Curve for BezierCurve<T, N> {
    type Scalar = T;
    type Point = Point<T, N>;

    fn evaluate(&self, t: T) -> Result<Point<T, N>> {
        match self.control_points.as_slice() {
            [p0, p1, p2] => Ok(quadratic_curve(*p0, *p1, *p2, t)),
            [p0, p1, p2, p3] => Ok(cubic_curve(*p0, *p1, *p2, *p3, t)),
            points => evaluate_polynomial_curve(points, t),
        }
    }
}
