use thiserror::Error;

/// Top-level error type for the curvelis kernel.
#[derive(Debug, Error)]
pub enum CurvelisError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Precondition violations in vector and matrix algebra.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("division by a value within tolerance of zero")]
    DegenerateDivisor,

    #[error("cannot normalize a zero-length vector")]
    ZeroLengthNormalization,

    #[error("cannot invert singular matrix (determinant = {determinant})")]
    SingularMatrix { determinant: f64 },

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors related to curve evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("a polynomial curve needs at least 2 control points, got {count}")]
    TooFewControlPoints { count: usize },

    #[error("non-finite elliptical arc input: {0}")]
    NonFiniteArcInput(&'static str),
}

/// Errors related to the process-wide tolerance configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tolerance is already installed")]
    AlreadyInstalled,

    #[error("invalid epsilon {value}: must be finite and in (0, 1)")]
    InvalidEpsilon { value: f64 },
}

/// Errors related to path flattening.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`CurvelisError`].
pub type Result<T> = std::result::Result<T, CurvelisError>;
