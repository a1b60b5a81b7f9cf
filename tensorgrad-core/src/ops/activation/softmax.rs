use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Softmax along the last axis. Each row of the result sums to one.
///
/// The forward pass subtracts the row maximum before exponentiating. The gradient
/// is the exact Jacobian-vector product `s * (g - Σ_last(g * s))`, cross terms included.
///
/// # Errors
/// Returns `TensorGradError::UnsupportedOperation` for a 0-dimensional operand.
pub fn softmax_op(a: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let a = a.into();
    let a_data = a.data();
    let ndim = a_data.ndim();
    if ndim == 0 {
        return Err(TensorGradError::UnsupportedOperation(
            "softmax requires at least one dimension".to_string(),
        ));
    }
    let last_axis = ndim - 1;

    let exps = a_data.sub(&a_data.max_last_axis())?.map(f64::exp);
    let output = exps.div(&exps.sum_axes(&[last_axis], true)?)?;

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        let s = output.clone();
        dependencies.push(Dependency::new(source, move |grad: &Buffer| {
            let dot = grad.mul(&s)?.sum_axes(&[last_axis], true)?;
            grad.sub(&dot)?.mul(&s)
        }));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
