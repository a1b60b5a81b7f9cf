// src/tensor/traits.rs

use crate::error::TensorGradError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::tensor::Tensor;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

impl Clone for Tensor {
    /// Shallow clone: the new handle shares the node (data, gradient, history).
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal when they have the same shape and values.
    /// Gradient state is not compared.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.read_data().buffer == other.read_data().buffer
    }
}

impl<'a> IntoIterator for &'a Tensor {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Operator sugar. Each operator is a thin wrapper over the named operation and
// returns its `Result`, so `(&a + &b)?` builds exactly the same graph as `add_op(&a, &b)?`.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<'a, 'b> $trait<&'b Tensor> for &'a Tensor {
            type Output = Result<Tensor, TensorGradError>;

            fn $method(self, rhs: &'b Tensor) -> Self::Output {
                $op(self, rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Tensor {
            type Output = Result<Tensor, TensorGradError>;

            fn $method(self, rhs: f64) -> Self::Output {
                $op(self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl<'a> Neg for &'a Tensor {
    type Output = Result<Tensor, TensorGradError>;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}
