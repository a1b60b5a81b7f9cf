use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Same values under a new shape with the same number of elements.
///
/// Gradient: the incoming gradient reshaped back to the operand's shape.
///
/// # Errors
/// Returns `TensorGradError::ShapeMismatch` if the element counts differ.
pub fn reshape_op(a: impl Into<Operand>, shape: &[usize]) -> Result<Tensor, TensorGradError> {
    let a = a.into();
    let a_data = a.data();
    let output = a_data.reshape(shape)?;

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        let original_shape = a_data.shape().to_vec();
        dependencies.push(Dependency::new(source, move |grad: &Buffer| {
            grad.reshape(&original_shape)
        }));
    }
    Ok(Tensor::from_op(output, dependencies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::check_grad;

    #[test]
    fn test_reshape_forward() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        let r = reshape_op(&t, &[3, 2]).unwrap();
        assert_eq!(r.shape(), vec![3, 2]);
        assert_eq!(r.data().as_slice(), t.data().as_slice());
        assert!(reshape_op(&t, &[4]).is_err());
    }

    #[test]
    fn test_reshape_backward_restores_shape() {
        let t = Tensor::new_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        let out_grad = Buffer::new(vec![0.1, 0.2, 0.3, 0.4], vec![4]).unwrap();
        check_grad(|ins| reshape_op(&ins[0], &[4]), &[t.clone()], &out_grad, 1e-6, 1e-6)
            .unwrap();
        let grad = t.grad().unwrap();
        assert_eq!(grad.shape(), &[2, 2]);
        assert_eq!(grad.as_slice(), &[0.1, 0.2, 0.3, 0.4]);
    }
}
