//! Loss functions. Each one reduces a prediction/target pair to a scalar tensor
//! built from engine operations, so `backward` on the result reaches the model.

pub mod crossentropy;
pub mod mse;

pub use crossentropy::{binary_crossentropy, categorical_crossentropy, EPSILON};
pub use mse::mse;

use crate::error::TensorGradError;
use crate::tensor::Tensor;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    /// Mean squared error over all elements.
    Mse,
    /// For sigmoid outputs in `[0, 1]` against 0/1 targets.
    BinaryCrossentropy,
    /// For softmax rows against one-hot targets, averaged over the batch.
    CategoricalCrossentropy,
}

impl Loss {
    /// Computes the loss as a 0-dimensional tensor.
    ///
    /// # Errors
    /// Returns `TensorGradError::ShapeMismatch` when `predicted` and `target` have different
    /// shapes, plus whatever the underlying operations report.
    pub fn compute(&self, predicted: &Tensor, target: &Tensor) -> Result<Tensor, TensorGradError> {
        if predicted.shape() != target.shape() {
            return Err(TensorGradError::ShapeMismatch {
                expected: predicted.shape(),
                actual: target.shape(),
                operation: format!("{} loss", self),
            });
        }
        match self {
            Loss::Mse => mse(predicted, target),
            Loss::BinaryCrossentropy => binary_crossentropy(predicted, target),
            Loss::CategoricalCrossentropy => categorical_crossentropy(predicted, target),
        }
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loss::Mse => write!(f, "mse"),
            Loss::BinaryCrossentropy => write!(f, "binary_crossentropy"),
            Loss::CategoricalCrossentropy => write!(f, "categorical_crossentropy"),
        }
    }
}
