use crate::error::TensorGradError;
use crate::nn::module::Module;
use crate::ops::view::reshape_op;
use crate::tensor::Tensor;
use std::fmt;

/// Flattens every sample of a batch: `(batch, d1, d2, ...)` becomes
/// `(batch, d1 * d2 * ...)`. A 1-D input is treated as a single sample `(1, n)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flatten;

impl Flatten {
    pub fn new() -> Self {
        Flatten
    }
}

impl Module for Flatten {
    fn forward(&self, input: &Tensor) -> Result<Tensor, TensorGradError> {
        let shape = input.shape();
        let target = match shape.as_slice() {
            [] => {
                return Err(TensorGradError::UnsupportedOperation(
                    "Flatten requires at least one dimension".to_string(),
                ))
            }
            [n] => vec![1, *n],
            [batch, rest @ ..] => vec![*batch, rest.iter().product()],
        };
        reshape_op(input, &target)
    }

    fn parameters(&self) -> Vec<Tensor> {
        Vec::new()
    }
}

impl fmt::Display for Flatten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flatten")
    }
}
