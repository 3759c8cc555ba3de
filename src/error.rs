use thiserror::Error;

/// Top-level error type for the noodle geometry kernel.
#[derive(Debug, Error)]
pub enum NoodleError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric construction and computation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("radius {radius} is too small for a chord of length {chord}, make it bigger")]
    RadiusTooSmall { radius: f64, chord: f64 },

    #[error("arc radius must be a non-negative finite number, got {0}")]
    InvalidRadius(f64),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to operations over primitives and shapes.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`NoodleError`].
pub type Result<T> = std::result::Result<T, NoodleError>;
