use crate::error::TensorGradError;
use crate::ops::{apply_unary_op, Operand};
use crate::tensor::Tensor;

/// Element-wise hyperbolic tangent. Gradient: `g * (1 - tanh(a)²)`.
pub fn tanh_op(a: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    apply_unary_op(a, f64::tanh, |_, output| output.map(|t| 1.0 - t * t))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
