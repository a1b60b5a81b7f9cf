//! # tensorgrad-core
//!
//! A minimal reverse-mode automatic differentiation engine and the small
//! neural-network library built on it.
//!
//! Expressions are built eagerly from [`Tensor`]s through the free functions in
//! [`ops`]; every operation records, on its result, one [`Dependency`] per
//! gradient-tracking operand. [`Tensor::backward`] then walks that graph and
//! accumulates gradients into every tracked tensor it reaches.
//!
//! ```
//! use tensorgrad_core::ops::{mul_op, sum_op};
//! use tensorgrad_core::Tensor;
//!
//! let x = Tensor::new_with_grad(vec![1.0, 2.0], vec![2])?;
//! let y = sum_op(mul_op(&x, &x)?)?;
//! assert_eq!(y.item()?, 5.0);
//! y.backward(None)?;
//! assert_eq!(x.grad().unwrap().as_slice(), &[2.0, 4.0]);
//! # Ok::<(), tensorgrad_core::TensorGradError>(())
//! ```

pub mod autograd;
pub mod buffer;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub use autograd::{backward, Dependency, GradFn};
pub use buffer::Buffer;
pub use error::TensorGradError;
pub use ops::Operand;
pub use tensor::Tensor;
