use crate::error::TensorGradError;
use crate::tensor::Tensor;
use std::fmt;

/// The base trait for all neural network modules (layers and containers).
///
/// Implemented by [`Dense`](crate::nn::Dense), [`Flatten`](crate::nn::Flatten) and
/// [`Sequential`](crate::model::Sequential). `Display` gives the one-line summary
/// containers use when listing their children.
pub trait Module: fmt::Debug + fmt::Display + Send + Sync {
    /// Performs a forward pass of the module.
    ///
    /// Inputs are batched along the first axis.
    fn forward(&self, input: &Tensor) -> Result<Tensor, TensorGradError>;

    /// Returns all learnable parameters of the module, including those of sub-modules.
    ///
    /// The returned tensors are shared handles: an optimiser updating them updates
    /// the module.
    fn parameters(&self) -> Vec<Tensor>;

    /// Resets the gradient of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
