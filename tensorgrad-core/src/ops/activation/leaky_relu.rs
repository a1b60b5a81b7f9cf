use crate::error::TensorGradError;
use crate::ops::{apply_unary_op, Operand};
use crate::tensor::Tensor;

/// Leaky ReLU: `a` where `a > 0`, `alpha * a` elsewhere.
///
/// Gradient: `g * (1 if a > 0 else alpha)`.
pub fn leaky_relu_op(a: impl Into<Operand>, alpha: f64) -> Result<Tensor, TensorGradError> {
    apply_unary_op(
        a,
        move |x| if x > 0.0 { x } else { alpha * x },
        move |input, _| input.map(|x| if x > 0.0 { 1.0 } else { alpha }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::check_grad;
    use crate::buffer::Buffer;
    use crate::utils::testing::check_tensor_near;

    #[test]
    fn test_leaky_relu_forward() {
        let t = Tensor::new(vec![-2.0, 0.0, 3.0], vec![3]).unwrap();
        check_tensor_near(&leaky_relu_op(&t, 0.1).unwrap(), &[3], &[-0.2, 0.0, 3.0], 1e-12);
    }

    #[test]
    fn test_leaky_relu_backward() {
        let t = Tensor::new_with_grad(vec![-2.0, -0.3, 0.4, 5.0], vec![4]).unwrap();
        let out_grad = Buffer::new(vec![1.0, 2.0, 3.0, 4.0], vec![4]).unwrap();
        check_grad(|ins| leaky_relu_op(&ins[0], 0.01), &[t.clone()], &out_grad, 1e-6, 1e-6)
            .unwrap();
        let grad = t.grad().unwrap();
        check_tensor_near(
            &Tensor::from_buffer(grad, false),
            &[4],
            &[0.01, 0.02, 3.0, 4.0],
            1e-12,
        );
    }
}
