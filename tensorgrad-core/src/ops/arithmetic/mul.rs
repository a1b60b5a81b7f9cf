use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Element-wise (Hadamard) product `a * b` with broadcasting.
///
/// Gradient: `g * b` for `a`, `g * a` for `b`. The values of both operands are
/// captured at forward time.
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let (a, b) = (a.into(), b.into());
    let (a_data, b_data) = (a.data(), b.data());
    let output = a_data.mul(&b_data)?;

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        let b_data = b_data.clone();
        dependencies.push(Dependency::new(source, move |grad: &Buffer| grad.mul(&b_data)));
    }
    if let Some(source) = b.tracked() {
        dependencies.push(Dependency::new(source, move |grad: &Buffer| grad.mul(&a_data)));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
