use crate::error::TensorGradError;
use crate::ops::arithmetic::{add_op, mul_op, sub_op};
use crate::ops::math_elem::log_op;
use crate::ops::reduction::sum_op;
use crate::tensor::Tensor;

/// Added inside the logarithms so that exact 0 or 1 predictions stay finite.
pub const EPSILON: f64 = 1e-12;

/// `-mean(t * log(p + ε) + (1 - t) * log(1 - p + ε))`.
///
/// # Errors
/// Returns `TensorGradError::NumericDomain` if a prediction lies outside `[0, 1]`
/// by more than `ε`.
pub fn binary_crossentropy(predicted: &Tensor, target: &Tensor) -> Result<Tensor, TensorGradError> {
    let numel = predicted.numel().max(1) as f64;
    let log_p = log_op(add_op(predicted, EPSILON)?)?;
    let log_not_p = log_op(add_op(sub_op(1.0, predicted)?, EPSILON)?)?;
    let not_target = sub_op(1.0, target)?;
    let per_element = add_op(mul_op(target, &log_p)?, mul_op(&not_target, &log_not_p)?)?;
    mul_op(sum_op(per_element)?, -1.0 / numel)
}

/// `-Σ(t * log(p + ε)) / batch`, where `batch` is the length of the first axis
/// (1 for a single 1-D distribution).
pub fn categorical_crossentropy(
    predicted: &Tensor,
    target: &Tensor,
) -> Result<Tensor, TensorGradError> {
    let shape = predicted.shape();
    let batch = match shape.as_slice() {
        [batch, _, ..] => (*batch).max(1) as f64,
        _ => 1.0,
    };
    let log_p = log_op(add_op(predicted, EPSILON)?)?;
    mul_op(sum_op(mul_op(target, &log_p)?)?, -1.0 / batch)
}
