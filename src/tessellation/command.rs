use crate::math::{Point2, Real, Vector2};

/// One drawing command of a 2D path.
///
/// Every command except [`PathCommand::MoveTo`] draws from the current point,
/// which is the end of the previous command (the origin at the start).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand<T: Real> {
    /// Starts a new subpath at the point.
    MoveTo(Point2<T>),
    /// Straight segment to the point.
    LineTo(Point2<T>),
    /// Quadratic Bezier segment.
    QuadTo { control: Point2<T>, to: Point2<T> },
    /// Cubic Bezier segment.
    CubicTo {
        control1: Point2<T>,
        control2: Point2<T>,
        to: Point2<T>,
    },
    /// SVG elliptical arc; `x_axis_rotation` is in radians.
    ArcTo {
        radii: Vector2<T>,
        x_axis_rotation: T,
        large_arc: bool,
        sweep: bool,
        to: Point2<T>,
    },
}

impl<T: Real> PathCommand<T> {
    /// The point the command ends at.
    #[must_use]
    pub fn end_point(&self) -> Point2<T> {
        match *self {
            Self::MoveTo(to)
            | Self::LineTo(to)
            | Self::QuadTo { to, .. }
            | Self::CubicTo { to, .. }
            | Self::ArcTo { to, .. } => to,
        }
    }
}
