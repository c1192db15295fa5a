use thiserror::Error;

/// Top-level error type for the block modeling pipeline.
#[derive(Debug, Error)]
pub enum BlockcutError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Boolean(#[from] BooleanError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors in the description of a base shape.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("unknown geometry type: {0:?}")]
    UnknownGeometryType(String),
}

/// Errors raised by a boolean subtraction.
#[derive(Debug, Error)]
pub enum BooleanError {
    #[error("{operand} operand has no usable triangles")]
    EmptyOperand { operand: &'static str },

    #[error("subtraction produced an empty result")]
    EmptyResult,

    #[error("subtraction produced an invalid result: {0}")]
    InvalidResult(String),
}

/// Errors related to mesh generation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`BlockcutError`].
pub type Result<T> = std::result::Result<T, BlockcutError>;
