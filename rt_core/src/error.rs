use thiserror::Error;

use crate::matrix::MatrixError;

#[derive(Debug, Error)]
pub enum RayTracerError {
    #[error("Attempt to use a non-vector tuple in a vector-only context")]
    NonVectorTuple,

    #[error("Attempt to add two points")]
    PointAddition,

    #[error("Attempt to normalize a tuple of zero magnitude")]
    ZeroMagnitude,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
