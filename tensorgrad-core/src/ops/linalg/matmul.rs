use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Matrix product of two 2-D operands: `(m, k) x (k, n) -> (m, n)`.
///
/// Gradient: `g · bᵀ` for `a`, `aᵀ · g` for `b`.
///
/// # Errors
/// Returns `TensorGradError::ShapeMismatch` if either operand is not 2-D or the
/// inner dimensions differ.
pub fn matmul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let (a, b) = (a.into(), b.into());
    let (a_data, b_data) = (a.data(), b.data());
    let output = a_data.matmul(&b_data)?;

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        let b_t = b_data.transpose()?;
        dependencies.push(Dependency::new(source, move |grad: &Buffer| grad.matmul(&b_t)));
    }
    if let Some(source) = b.tracked() {
        let a_t = a_data.transpose()?;
        dependencies.push(Dependency::new(source, move |grad: &Buffer| a_t.matmul(grad)));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
