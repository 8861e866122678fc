use thiserror::Error;

// Unified error type for denmat

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatError {
    #[error("index {0} >= {1}")]
    IndexOutOfBounds(usize, usize),
    #[error("size mismatch: this ({0}, {1}) != other ({2}, {3})")]
    DimensionMismatch(usize, usize, usize, usize),
    #[error("rows = {0} is not equal to cols = {1}")]
    NotSquare(usize, usize),
    #[error("the determinant is zero")]
    SingularMatrix,
    #[error("invalid shape ({0}, {1}) for buffer of length {2}")]
    InvalidShape(usize, usize, usize),
}
