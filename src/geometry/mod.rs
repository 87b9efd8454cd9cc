pub mod curve;

pub use curve::{
    cubic_curve, evaluate_elliptical_arc, evaluate_polynomial_curve, quadratic_curve, BezierCurve,
    Curve, EllipticalArc,
};
