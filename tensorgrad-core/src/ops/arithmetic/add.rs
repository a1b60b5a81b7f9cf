use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Element-wise `a + b` with broadcasting.
///
/// Gradient: `g` for both operands.
///
/// # Errors
/// Returns `TensorGradError::BroadcastError` if the shapes are not broadcast-compatible.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let (a, b) = (a.into(), b.into());
    let output = a.data().add(&b.data())?;

    let mut dependencies = Vec::new();
    for source in [a.tracked(), b.tracked()].into_iter().flatten() {
        dependencies.push(Dependency::new(source, |grad: &Buffer| Ok(grad.clone())));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
