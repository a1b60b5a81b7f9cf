use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Element-wise `a / b` with broadcasting.
///
/// Gradient: `g / b` for `a`, `-g * a / b²` for `b`.
///
/// # Errors
/// * `TensorGradError::NumericDomain` if any element of `b` is zero.
/// * `TensorGradError::BroadcastError` if the shapes are not broadcast-compatible.
pub fn div_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let (a, b) = (a.into(), b.into());
    let (a_data, b_data) = (a.data(), b.data());
    if b_data.any(|x| x == 0.0) {
        return Err(TensorGradError::NumericDomain {
            operation: "div".to_string(),
            message: "division by zero".to_string(),
        });
    }
    let output = a_data.div(&b_data)?;

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        let b_data = b_data.clone();
        dependencies.push(Dependency::new(source, move |grad: &Buffer| grad.div(&b_data)));
    }
    if let Some(source) = b.tracked() {
        // -a / b² evaluated once; only the incoming gradient varies.
        let local = a_data.div(&b_data.mul(&b_data)?)?.scale(-1.0);
        dependencies.push(Dependency::new(source, move |grad: &Buffer| grad.mul(&local)));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
