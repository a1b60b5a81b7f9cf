use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Element-wise `a - b` with broadcasting.
///
/// Gradient: `g` for `a`, `-g` for `b`.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let (a, b) = (a.into(), b.into());
    let output = a.data().sub(&b.data())?;

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        dependencies.push(Dependency::new(source, |grad: &Buffer| Ok(grad.clone())));
    }
    if let Some(source) = b.tracked() {
        dependencies.push(Dependency::new(source, |grad: &Buffer| Ok(grad.scale(-1.0))));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
