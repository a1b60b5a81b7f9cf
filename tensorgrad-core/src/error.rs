use thiserror::Error;

/// Custom error type for the tensorgrad engine.
///
/// Every error is raised synchronously at the call site of the offending
/// operation (or of `backward`). None of them are recovered internally.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum TensorGradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Backward called on non-scalar tensor of shape {shape:?} without an incoming gradient.")]
    GradientShapeRequired { shape: Vec<usize> },

    #[error("Numeric domain error in {operation}: {message}")]
    NumericDomain { operation: String, message: String },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
