use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Sum of all elements, as a 0-dimensional tensor.
///
/// Gradient: the incoming scalar gradient broadcast to the operand's shape.
pub fn sum_op(a: impl Into<Operand>) -> Result<Tensor, TensorGradError> {
    let a = a.into();
    let a_data = a.data();
    let output = Buffer::scalar(a_data.sum());

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        let shape = a_data.shape().to_vec();
        dependencies.push(Dependency::new(source, move |grad: &Buffer| {
            Ok(Buffer::full(&shape, grad.item()?))
        }));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
