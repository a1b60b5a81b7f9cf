use crate::error::TensorGradError;
use crate::ops::{apply_unary_op, Operand};
use crate::tensor::Tensor;

/// Element-wise natural logarithm.
///
/// Gradient: `g / a`.
///
/// # Errors
/// Returns `TensorGradError::NumericDomain` if any element is not strictly positive.
pub fn log_op(a: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let a = a.into();
    if a.data().any(|x| x <= 0.0 || x.is_nan()) {
        return Err(TensorGradError::NumericDomain {
            operation: "log".to_string(),
            message: "logarithm of a non-positive value".to_string(),
        });
    }
    apply_unary_op(a, f64::ln, |input, _| input.map(|x| 1.0 / x))
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
