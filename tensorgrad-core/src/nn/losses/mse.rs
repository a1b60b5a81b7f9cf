use crate::error::TensorGradError;
use crate::ops::arithmetic::{mul_op, sub_op};
use crate::ops::reduction::sum_op;
use crate::tensor::Tensor;

/// `mean((predicted - target)²)` over all elements.
pub fn mse(predicted: &Tensor, target: &Tensor) -> Result<Tensor, TensorGradError> {
    let numel = predicted.numel().max(1) as f64;
    let diff = sub_op(predicted, target)?;
    let squared = mul_op(&diff, &diff)?;
    mul_op(sum_op(squared)?, 1.0 / numel)
}
