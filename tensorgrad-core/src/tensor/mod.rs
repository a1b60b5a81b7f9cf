// src/tensor/mod.rs

use crate::autograd::Dependency;
use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::tensor_data::TensorData;
use std::sync::{Arc, RwLock};

pub mod broadcast_utils;
pub mod create;
mod debug;
mod traits;
pub mod utils;

pub use create::{full, ones, ones_like, rand_uniform, randn, zeros, zeros_like};

/// The engine's differentiable value: a numeric [`Buffer`] plus gradient bookkeeping.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** cloning a `Tensor` is cheap and yields another handle to
///     the same node. Dependency edges, models and optimisers all hold such handles.
/// 2.  **Interior Mutability:** the gradient is accumulated and the data replaced
///     through an immutable `Tensor` reference, guarded by the `RwLock`.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    fn from_tensor_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Creates a new leaf tensor that does not track gradients.
    ///
    /// # Errors
    /// Returns `TensorGradError::TensorCreationError` if the length of `data` does not
    /// match the number of elements described by `shape`.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, TensorGradError> {
        Ok(Tensor::from_buffer(Buffer::new(data, shape)?, false))
    }

    /// Creates a new leaf tensor that tracks gradients.
    pub fn new_with_grad(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, TensorGradError> {
        Ok(Tensor::from_buffer(Buffer::new(data, shape)?, true))
    }

    pub fn from_buffer(buffer: Buffer, requires_grad: bool) -> Self {
        Tensor::from_tensor_data(TensorData::new(buffer, requires_grad))
    }

    /// 0-dimensional tensor holding `value`.
    pub fn scalar(value: f64) -> Self {
        Tensor::from_buffer(Buffer::scalar(value), false)
    }

    /// Builds the result of an operation.
    ///
    /// `dependencies` must contain one edge per gradient-tracking operand. The result
    /// tracks gradients iff that list is non-empty.
    pub fn from_op(buffer: Buffer, dependencies: Vec<Dependency>) -> Self {
        Tensor::from_tensor_data(TensorData::from_op(buffer, dependencies))
    }

    /// Acquires a read lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Snapshot of the tensor's values.
    pub fn data(&self) -> Buffer {
        self.read_data().buffer.clone()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape().to_vec()
    }

    pub fn ndim(&self) -> usize {
        self.read_data().shape().len()
    }

    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Value of a single-element tensor.
    pub fn item(&self) -> Result<f64, TensorGradError> {
        self.read_data().buffer.item()
    }

    /// Iterates over a snapshot of the elements in row-major order.
    pub fn iter(&self) -> std::vec::IntoIter<f64> {
        self.data().into_vec().into_iter()
    }

    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Turns gradient tracking on or off. Turning it off drops any stored gradient.
    pub fn set_requires_grad(&self, requires_grad: bool) {
        let mut guard = self.write_data();
        guard.requires_grad = requires_grad;
        if !requires_grad {
            guard.grad = None;
        }
    }

    /// Copy of the accumulated gradient, if any.
    pub fn grad(&self) -> Option<Buffer> {
        self.read_data().grad.clone()
    }

    /// Edges to the operands this tensor was computed from.
    pub fn dependencies(&self) -> Vec<Dependency> {
        self.read_data().dependencies.clone()
    }

    /// True when the tensor has no recorded history.
    pub fn is_leaf(&self) -> bool {
        self.read_data().dependencies.is_empty()
    }

    /// True when both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Replaces the tensor's values.
    ///
    /// The gradient is reset to absent and the dependency edges are discarded, since
    /// both described the previous values. `requires_grad` is kept. Every handle
    /// sharing this node observes the new values.
    pub fn set_data(&self, buffer: Buffer) {
        self.write_data().replace_buffer(buffer);
    }

    /// Resets the gradient to absent. Data and dependencies are untouched.
    pub fn zero_grad(&self) {
        self.write_data().grad = None;
    }

    /// New leaf with a copy of the values and no gradient tracking.
    pub fn detach(&self) -> Tensor {
        Tensor::from_buffer(self.data(), false)
    }
}

#[cfg(test)]
#[path = "tensor_test.rs"]
mod tests;
