use super::*;
use crate::autograd::grad_check::check_grad;
use crate::buffer::Buffer;
use crate::utils::testing::check_tensor_near;

#[test]
fn test_relu_forward() {
    let input = Tensor::new(vec![-2.0, -1.0, 0.0, 1.0, 2.0], vec![5]).unwrap();
    check_tensor_near(&relu_op(&input).unwrap(), &[5], &[0.0, 0.0, 0.0, 1.0, 2.0], 1e-12);
}

#[test]
fn test_relu_backward_at_zero_is_zero() {
    let input = Tensor::new_with_grad(vec![-2.0, 0.0, 3.0], vec![3]).unwrap();
    relu_op(&input)
        .unwrap()
        .backward(Some(&Buffer::ones(&[3])))
        .unwrap();
    assert_eq!(input.grad().unwrap().as_slice(), &[0.0, 0.0, 1.0]);
}

#[test]
fn test_relu_backward_check_grad() {
    // Stay away from the kink at 0, where the finite difference is meaningless.
    let input = Tensor::new_with_grad(vec![-2.0, -0.5, 0.5, 1.5, 3.0, -1.0], vec![2, 3]).unwrap();
    let out_grad = Buffer::new(vec![1.0, 2.0, 3.0, -1.0, 0.5, 1.0], vec![2, 3]).unwrap();
    check_grad(|ins| relu_op(&ins[0]), &[input], &out_grad, 1e-6, 1e-6).unwrap();
}
