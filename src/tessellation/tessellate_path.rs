use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{cubic_curve, evaluate_elliptical_arc, quadratic_curve};
use crate::math::scalar::from_f64;
use crate::math::{Point2, Real};

use super::{PathCommand, Polyline, TessellationParams};

/// Flattens a sequence of path commands into one polyline per subpath.
///
/// Curve commands are sampled at `t = i / segments` for `i = 1..=segments`;
/// straight segments contribute their end point only. Subpaths that never
/// draw anything are dropped.
#[derive(Debug)]
pub struct TessellatePath<T: Real> {
    commands: Vec<PathCommand<T>>,
    params: TessellationParams,
}

impl<T: Real> TessellatePath<T> {
    /// Creates a new `TessellatePath` operation.
    #[must_use]
    pub fn new(commands: Vec<PathCommand<T>>, params: TessellationParams) -> Self {
        Self { commands, params }
    }

    /// Executes the flattening.
    ///
    /// # Errors
    ///
    /// Returns an error if an arc command has non-finite input.
    pub fn execute(&self) -> Result<Vec<Polyline<T>>> {
        debug!(
            commands = self.commands.len(),
            segments = self.params.segments(),
            "flattening path"
        );

        let mut polylines = Vec::new();
        let mut current: Vec<Point2<T>> = Vec::new();
        let mut marker = Point2::origin();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) => {
                    finish_subpath(&mut polylines, &mut current);
                    current.push(to);
                }
                PathCommand::LineTo(to) => {
                    begin_subpath(&mut current, marker);
                    current.push(to);
                }
                PathCommand::QuadTo { control, to } => {
                    begin_subpath(&mut current, marker);
                    let from = marker;
                    self.sample(&mut current, |t| Ok(quadratic_curve(from, control, to, t)))?;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    begin_subpath(&mut current, marker);
                    let from = marker;
                    self.sample(&mut current, |t| {
                        Ok(cubic_curve(from, control1, control2, to, t))
                    })?;
                }
                PathCommand::ArcTo {
                    radii,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    begin_subpath(&mut current, marker);
                    let from = marker;
                    self.sample(&mut current, |t| {
                        evaluate_elliptical_arc(from, to, radii, large_arc, sweep, x_axis_rotation, t)
                    })?;
                }
            }
            marker = command.end_point();
        }
        finish_subpath(&mut polylines, &mut current);

        debug!(subpaths = polylines.len(), "path flattened");
        Ok(polylines)
    }

    /// Appends the curve's samples at `t = 1/segments, ..., 1`.
    #[allow(clippy::cast_precision_loss)]
    fn sample<F>(&self, out: &mut Vec<Point2<T>>, curve: F) -> Result<()>
    where
        F: Fn(T) -> Result<Point2<T>>,
    {
        let segments = self.params.segments();
        let n = from_f64::<T>(segments as f64);
        out.reserve(segments);
        for i in 1..=segments {
            out.push(curve(from_f64::<T>(i as f64) / n)?);
        }
        Ok(())
    }
}

/// Drawing with no open subpath starts one at the current point.
fn begin_subpath<T: Real>(current: &mut Vec<Point2<T>>, marker: Point2<T>) {
    if current.is_empty() {
        current.push(marker);
    }
}

/// Moves the subpath under construction into `polylines`, dropping it if it
/// has fewer than two vertices.
fn finish_subpath<T: Real>(polylines: &mut Vec<Polyline<T>>, current: &mut Vec<Point2<T>>) {
    let points = std::mem::take(current);
    match points.len() {
        0 => {}
        1 => trace!("dropping subpath with a single vertex"),
        _ => polylines.push(Polyline { points }),
    }
}
