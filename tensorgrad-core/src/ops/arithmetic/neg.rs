use crate::error::TensorGradError;
use crate::ops::{apply_unary_op, Operand};
use crate::tensor::Tensor;

/// Element-wise negation. Gradient: `-g`.
pub fn neg_op(a: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    apply_unary_op(a, |x| -x, |input, _| input.map(|_| -1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
