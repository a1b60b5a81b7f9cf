use crate::error::TensorGradError;
use crate::tensor::Tensor;

/// Common interface of the optimisers. [`GradientDescent`](super::GradientDescent) is
/// the implementer shipped with the crate.
pub trait Optimizer {
    /// Performs a single optimisation step using the parameters' accumulated gradients.
    fn step(&mut self) -> Result<(), TensorGradError>;

    /// Clears the gradients of all parameters managed by the optimiser.
    fn zero_grad(&mut self) {
        for param in self.params() {
            param.zero_grad();
        }
    }

    /// The parameters being optimised (shared handles).
    fn params(&self) -> &[Tensor];
}
