use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::tensor::Tensor;
use std::fmt;
use std::sync::Arc;

/// Vector-Jacobian product of one operand.
///
/// Maps the gradient arriving on an operation's result (shaped like the result) to
/// that operand's contribution, before any broadcast reduction.
pub type GradFn = Arc<dyn Fn(&Buffer) -> Result<Buffer, TensorGradError> + Send + Sync>;

/// Edge from a computed tensor to one operand it was derived from.
///
/// `source` is a shared handle: the operand keeps its own lifetime (a model
/// parameter outlives every graph that uses it). Edges are immutable once built.
#[derive(Clone)]
pub struct Dependency {
    pub source: Tensor,
    pub grad_fn: GradFn,
}

impl Dependency {
    pub fn new<F>(source: Tensor, grad_fn: F) -> Self
    where
        F: Fn(&Buffer) -> Result<Buffer, TensorGradError> + Send + Sync + 'static,
    {
        Dependency {
            source,
            grad_fn: Arc::new(grad_fn),
        }
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("source_shape", &self.source.shape())
            .field("source_requires_grad", &self.source.requires_grad())
            .finish_non_exhaustive()
    }
}
