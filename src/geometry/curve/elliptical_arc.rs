//! SVG-style elliptical arcs.
//!
//! An arc is given in endpoint form: two endpoints, the ellipse radii, the
//! rotation of the ellipse's x-axis and the two SVG flags. Evaluation first
//! converts to center form (center, start angle, signed sweep angle) and then
//! walks the angle linearly with `t`.

use tracing::trace;

use crate::error::{CurveError, Result};
use crate::math::tolerance::max0;
use crate::math::{Lerp, Matrix2, Point2, Real, Scalar, Vector2};

use super::Curve;

/// An elliptical arc in endpoint form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc<T: Real> {
    start: Point2<T>,
    end: Point2<T>,
    radii: Vector2<T>,
    x_axis_rotation: T,
    large_arc: bool,
    sweep: bool,
}

impl<T: Real> EllipticalArc<T> {
    /// Creates an arc from `start` to `end`.
    ///
    /// `x_axis_rotation` is in radians. `large_arc` picks the arc spanning more
    /// than 180 degrees; `sweep` picks the positive-angle direction.
    #[must_use]
    pub fn new(
        start: Point2<T>,
        end: Point2<T>,
        radii: Vector2<T>,
        x_axis_rotation: T,
        large_arc: bool,
        sweep: bool,
    ) -> Self {
        Self {
            start,
            end,
            radii,
            x_axis_rotation,
            large_arc,
            sweep,
        }
    }

    /// Returns the start point of the arc.
    #[must_use]
    pub fn start(&self) -> Point2<T> {
        self.start
    }

    /// Returns the end point of the arc.
    #[must_use]
    pub fn end(&self) -> Point2<T> {
        self.end
    }

    /// Returns the ellipse radii.
    #[must_use]
    pub fn radii(&self) -> Vector2<T> {
        self.radii
    }

    /// Returns the rotation of the ellipse's x-axis, in radians.
    #[must_use]
    pub fn x_axis_rotation(&self) -> T {
        self.x_axis_rotation
    }

    /// Returns the large-arc flag.
    #[must_use]
    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    /// Returns the sweep flag.
    #[must_use]
    pub fn sweep(&self) -> bool {
        self.sweep
    }
}

impl<T: Real> Curve for EllipticalArc<T> {
    type Scalar = T;
    type Point = Point2<T>;

    fn evaluate(&self, t: T) -> Result<Point2<T>> {
        evaluate_elliptical_arc(
            self.start,
            self.end,
            self.radii,
            self.large_arc,
            self.sweep,
            self.x_axis_rotation,
            t,
        )
    }
}

/// Center form of a non-degenerate arc.
struct CenterArc<T: Real> {
    center: Point2<T>,
    radii: Vector2<T>,
    rotation: Matrix2<T>,
    start_angle: T,
    sweep_angle: T,
}

impl<T: Real> CenterArc<T> {
    /// Endpoint to center conversion. `p0 != p1` and both radii are non-zero.
    fn from_endpoints(
        p0: Point2<T>,
        p1: Point2<T>,
        radii: Vector2<T>,
        large_arc: bool,
        sweep: bool,
        x_axis_rotation: T,
    ) -> Self {
        let two = T::one() + T::one();
        let tau = T::PI() * two;
        let rotation = Matrix2::rotation(x_axis_rotation);

        // Endpoints in the ellipse's own frame, relative to their midpoint.
        let prime = rotation.transpose().dot(&((p0 - p1) * (T::one() / two)));
        let (x1, y1) = (prime.x(), prime.y());

        let mut rx = radii.x().abs();
        let mut ry = radii.y().abs();
        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > T::one() {
            let scale = lambda.sqrt();
            trace!(lambda = ?lambda, "arc radii scaled up to reach endpoint");
            rx = rx * scale;
            ry = ry * scale;
        }

        let (rx2, ry2, x12, y12) = (rx * rx, ry * ry, x1 * x1, y1 * y1);
        let denominator = rx2 * y12 + ry2 * x12;
        let radicand = if denominator > T::zero() {
            max0((rx2 * ry2 - rx2 * y12 - ry2 * x12) / denominator)
        } else {
            T::zero()
        };
        let sign = if large_arc == sweep {
            -T::one()
        } else {
            T::one()
        };
        let coef = sign * radicand.sqrt();
        let center_prime = Vector2::new(coef * rx * y1 / ry, -(coef * ry * x1 / rx));

        let center = p0.midpoint(p1) + rotation.dot(&center_prime);

        let u = Vector2::new((x1 - center_prime.x()) / rx, (y1 - center_prime.y()) / ry);
        let v = Vector2::new(
            (-x1 - center_prime.x()) / rx,
            (-y1 - center_prime.y()) / ry,
        );
        let start_angle = signed_angle(&Vector2::new(T::one(), T::zero()), &u);
        let mut sweep_angle = signed_angle(&u, &v) % tau;
        if sweep && sweep_angle < T::zero() {
            sweep_angle = sweep_angle + tau;
        } else if !sweep && sweep_angle > T::zero() {
            sweep_angle = sweep_angle - tau;
        }

        Self {
            center,
            radii: Vector2::new(rx, ry),
            rotation,
            start_angle,
            sweep_angle,
        }
    }

    fn point_at(&self, t: T) -> Point2<T> {
        let theta = self.start_angle + t * self.sweep_angle;
        let local = Vector2::new(
            self.radii.x() * theta.cos(),
            self.radii.y() * theta.sin(),
        );
        self.center + self.rotation.dot(&local)
    }
}

/// Angle in `(-pi, pi]` that rotates `a` onto `b`.
fn signed_angle<T: Real>(a: &Vector2<T>, b: &Vector2<T>) -> T {
    a.perp_dot(b).atan2(a.dot(b))
}

/// Evaluates the SVG elliptical arc from `p0` to `p1` at `t`.
///
/// `x_axis_rotation` is in radians. `t = 0` yields `p0` and `t = 1` yields
/// `p1`, within tolerance. Out-of-range radii follow the SVG rules: negative
/// radii use their magnitude, radii too small to span the endpoints are scaled
/// up, coincident endpoints yield `p0` for every `t`, and a zero radius
/// degrades the arc to the straight segment `p0 -> p1`.
///
/// # Errors
///
/// Returns [`CurveError::NonFiniteArcInput`] if any input is NaN or infinite.
pub fn evaluate_elliptical_arc<T: Real>(
    p0: Point2<T>,
    p1: Point2<T>,
    radii: Vector2<T>,
    large_arc: bool,
    sweep: bool,
    x_axis_rotation: T,
    t: T,
) -> Result<Point2<T>> {
    let non_finite = if !p0.is_finite() {
        Some("start point")
    } else if !p1.is_finite() {
        Some("end point")
    } else if !radii.is_finite() {
        Some("radii")
    } else if !x_axis_rotation.is_finite() {
        Some("x-axis rotation")
    } else if !t.is_finite() {
        Some("parameter")
    } else {
        None
    };
    if let Some(what) = non_finite {
        return Err(CurveError::NonFiniteArcInput(what).into());
    }

    if (p1 - p0).is_zero() {
        trace!("arc endpoints coincide; arc omitted");
        return Ok(p0);
    }
    if radii.x().is_negligible() || radii.y().is_negligible() {
        trace!("arc radius is zero; treated as a line segment");
        return Ok(Point2::lerp(t, p0, p1));
    }

    Ok(CenterArc::from_endpoints(p0, p1, radii, large_arc, sweep, x_axis_rotation).point_at(t))
}
