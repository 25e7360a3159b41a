//! Error types for primitive construction and argument validation.

use thiserror::Error;

/// A factory was asked to build a primitive its inputs cannot describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("line direction has zero length")]
    ZeroDirection,

    #[error("plane basis vectors are parallel, normal would be zero")]
    DegenerateNormal,

    #[error("points coincide, cannot derive a direction")]
    CoincidentPoints,

    #[error("bound box minimum exceeds maximum on some axis")]
    InvertedBounds,
}

/// An argument outside the domain of the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("a concrete axis is required, got Axis::None")]
    NoneAxis,
}

/// Any error raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Result alias with [`GeomError`] as the error type.
pub type Result<T> = std::result::Result<T, GeomError>;
