use super::*;
use crate::autograd::grad_check::check_grad;
use crate::buffer::Buffer;
use crate::utils::testing::check_tensor_near;
use approx::assert_relative_eq;
use std::f64::consts::E;

#[test]
fn test_log_forward() {
    let t = Tensor::new(vec![1.0, E, E * E], vec![3]).unwrap();
    check_tensor_near(&log_op(&t).unwrap(), &[3], &[0.0, 1.0, 2.0], 1e-12);
}

#[test]
fn test_log_non_positive_is_domain_error() {
    for bad in [0.0, -1.0] {
        let t = Tensor::new_with_grad(vec![1.0, bad], vec![2]).unwrap();
        assert!(matches!(
            log_op(&t),
            Err(TensorGradError::NumericDomain { .. })
        ));
    }
}

#[test]
fn test_log_backward_check_grad() {
    let t = Tensor::new_with_grad(vec![0.5, 1.0, 4.0, 10.0], vec![2, 2]).unwrap();
    let out_grad = Buffer::new(vec![1.0, -2.0, 0.5, 3.0], vec![2, 2]).unwrap();
    check_grad(|ins| log_op(&ins[0]), &[t.clone()], &out_grad, 1e-6, 1e-5).unwrap();
    let grad = t.grad().unwrap();
    for (g, e) in grad.iter().zip([2.0, -2.0, 0.125, 0.3]) {
        assert_relative_eq!(*g, e, epsilon = 1e-12);
    }
}
