use crate::error::TensorGradError;
use crate::ops::{apply_unary_op, Operand};
use crate::tensor::Tensor;

/// Logistic function, evaluated without overflowing `exp` for large `|x|`.
pub(crate) fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Element-wise sigmoid. Gradient: `g * s * (1 - s)` with `s = sigmoid(a)`.
pub fn sigmoid_op(a: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    apply_unary_op(a, sigmoid, |_, output| output.map(|s| s * (1.0 - s)))
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
