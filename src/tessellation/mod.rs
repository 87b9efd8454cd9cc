mod command;
mod tessellate_path;

pub use command::PathCommand;
pub use tessellate_path::TessellatePath;

use crate::error::{Result, TessellationError};
use crate::math::{Point2, Real};

/// Number of samples taken per curve command.
const DEFAULT_SEGMENTS: usize = 10;

/// Parameters controlling flattening quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    segments: usize,
}

impl TessellationParams {
    /// Creates parameters that sample each curve `segments` times.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero.
    pub fn new(segments: usize) -> Result<Self> {
        if segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "segments per curve must be at least 1".to_owned(),
            )
            .into());
        }
        Ok(Self { segments })
    }

    /// Returns the number of segments per curve.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// A flattened subpath.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T: Real> {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2<T>>,
}

impl<T: Real> Default for Polyline<T> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}
