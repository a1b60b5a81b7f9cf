// src/tensor_data.rs
use crate::autograd::Dependency;
use crate::buffer::Buffer;

/// Internal storage and autograd metadata for a Tensor.
///
/// It is wrapped in `Arc<RwLock<TensorData>>` by the `Tensor` struct so that the
/// same node can be shared between a model, an optimiser and any expression
/// graph that used it.
#[derive(Debug)]
pub struct TensorData {
    /// The numeric values. Owned exclusively by this node.
    pub(crate) buffer: Buffer,
    /// Accumulated gradient, same shape as `buffer`. `None` until first populated.
    pub(crate) grad: Option<Buffer>,
    /// Whether gradients flow into this node.
    pub(crate) requires_grad: bool,
    /// Edges to the operands this node was computed from. Empty for leaves.
    pub(crate) dependencies: Vec<Dependency>,
}

impl TensorData {
    /// Leaf data with no recorded history.
    pub fn new(buffer: Buffer, requires_grad: bool) -> Self {
        TensorData {
            buffer,
            grad: None,
            requires_grad,
            dependencies: Vec::new(),
        }
    }

    /// Result of an operation. Tracks gradients iff at least one edge was recorded.
    pub(crate) fn from_op(buffer: Buffer, dependencies: Vec<Dependency>) -> Self {
        TensorData {
            buffer,
            grad: None,
            requires_grad: !dependencies.is_empty(),
            dependencies,
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.buffer.shape()
    }

    pub fn numel(&self) -> usize {
        self.buffer.numel()
    }

    /// Replaces the values. The gradient and the recorded history belong to the
    /// old values, so both are discarded.
    pub(crate) fn replace_buffer(&mut self, buffer: Buffer) {
        self.buffer = buffer;
        self.grad = None;
        self.dependencies.clear();
    }
}
