//! # Tensor Operations Module (`ops`)
//!
//! The only sanctioned way to build differentiable expressions. Every operation is a
//! free `xxx_op` function that:
//!
//! 1. computes the forward [`Buffer`] from its operands' values,
//! 2. records one [`Dependency`] per gradient-tracking operand, carrying the
//!    vector-Jacobian product of that operand,
//! 3. returns a new [`Tensor`] that tracks gradients iff at least one edge was recorded.
//!
//! Operands are taken as `impl Into<Operand>`, so plain numbers, vectors and buffers
//! mix freely with tensors and act as constants. Operations never mutate their inputs.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: broadcasting element-wise `add`, `sub`, `mul`, `div` and `neg`.
//! - [`linalg`]: 2-D matrix multiplication.
//! - [`reduction`]: `sum` over all elements.
//! - [`math_elem`]: element-wise `log`.
//! - [`activation`]: `tanh`, `sigmoid`, `relu`, `leaky_relu`, `softmax`.
//! - [`view`]: `reshape`.

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod math_elem;
pub mod operand;
pub mod reduction;
pub mod view;

pub use operand::Operand;

pub use activation::{leaky_relu_op, relu_op, sigmoid_op, softmax_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
pub use linalg::matmul_op;
pub use math_elem::log_op;
pub use reduction::sum_op;
pub use view::reshape_op;

use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::tensor::Tensor;

/// Applies a unary element-wise operation to an operand.
///
/// # Arguments
/// * `a`: The input operand.
/// * `forward`: element-wise forward function.
/// * `derivative`: builds the local derivative `d out / d a` element-wise from the
///   input and output buffers. The recorded gradient function multiplies it by the
///   incoming gradient.
pub(crate) fn apply_unary_op<F, D>(
    a: impl Into<Operand>,
    forward: F,
    derivative: D,
) -> Result<Tensor, TensorGradError>
where
    F: Fn(f64) -> f64,
    D: Fn(&Buffer, &Buffer) -> Buffer,
{
    let a = a.into();
    let input = a.data();
    let output = input.map(forward);

    let mut dependencies = Vec::new();
    if let Some(source) = a.tracked() {
        let local = derivative(&input, &output);
        dependencies.push(Dependency::new(source, move |grad: &Buffer| grad.mul(&local)));
    }
    Ok(Tensor::from_op(output, dependencies))
}
