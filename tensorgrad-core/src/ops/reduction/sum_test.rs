use super::*;
use crate::autograd::grad_check::check_grad;

#[test]
fn test_sum_forward() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    let s = sum_op(&t).unwrap();
    assert!(s.shape().is_empty());
    assert_eq!(s.item().unwrap(), 21.0);
    assert!(!s.requires_grad());
}

#[test]
fn test_sum_backward_spreads_gradient() {
    let t = Tensor::new_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let s = sum_op(&t).unwrap();
    s.backward(Some(&Buffer::scalar(3.0))).unwrap();
    let grad = t.grad().unwrap();
    assert_eq!(grad.shape(), &[2, 2]);
    assert_eq!(grad.as_slice(), &[3.0; 4]);
}

#[test]
fn test_sum_backward_check_grad() {
    let t = Tensor::new_with_grad(vec![0.3, -1.2, 2.2], vec![3]).unwrap();
    check_grad(|ins| sum_op(&ins[0]), &[t], &Buffer::scalar(1.0), 1e-6, 1e-6).unwrap();
}
