use super::*;
use crate::autograd::grad_check::check_grad;
use crate::buffer::Buffer;
use crate::utils::testing::check_tensor_near;

#[test]
fn test_neg_forward() {
    let t = Tensor::new(vec![1.0, -2.0, 0.0], vec![3]).unwrap();
    check_tensor_near(&neg_op(&t).unwrap(), &[3], &[-1.0, 2.0, 0.0], 1e-12);
}

#[test]
fn test_neg_backward() {
    let x = Tensor::new_with_grad(vec![1.0, -2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let out_grad = Buffer::new(vec![0.1, 0.2, 0.3, 0.4], vec![2, 2]).unwrap();
    check_grad(|ins| neg_op(&ins[0]), &[x.clone()], &out_grad, 1e-6, 1e-6).unwrap();
    assert_eq!(x.grad().unwrap().as_slice(), &[-0.1, -0.2, -0.3, -0.4]);
}
