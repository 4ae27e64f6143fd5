use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("the coordinates must be nonempty")]
    EmptyCoordinates,

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("cannot normalize the zero vector")]
    ZeroVector,

    #[error("cannot compute an angle with the zero vector")]
    AngleWithZeroVector,

    #[error("no unique parallel component with a zero basis vector")]
    NoUniqueParallelComponent,

    #[error("no unique orthogonal component with a zero basis vector")]
    NoUniqueOrthogonalComponent,

    #[error("cross product is only defined in two and three dimensions, got {0}")]
    UnsupportedDimension(usize),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("line normal vector must be two dimensional, got {0}")]
    NotTwoDimensional(usize),

    #[error("no nonzero elements found")]
    NoNonzeroElements,
}
