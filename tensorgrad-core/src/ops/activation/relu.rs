use crate::error::TensorGradError;
use crate::ops::{apply_unary_op, Operand};
use crate::tensor::Tensor;

/// Rectified linear unit `max(a, 0)`. Gradient: `g * [a > 0]`.
pub fn relu_op(a: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    apply_unary_op(
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        |input, _| input.map(|x| if x > 0.0 { 1.0 } else { 0.0 }),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
