use crate::error::TensorGradError;
use crate::nn::activation::Activation;
use crate::nn::init::glorot_normal;
use crate::nn::module::Module;
use crate::ops::arithmetic::add_op;
use crate::ops::linalg::matmul_op;
use crate::tensor::{zeros, Tensor};
use log::debug;
use rand::Rng;
use std::fmt;

/// Fully connected layer: `activation(x · W + b)`.
///
/// `W` has shape `(in_features, out_features)` and `b` has shape `(out_features,)`,
/// so a `(batch, in_features)` input yields `(batch, out_features)`.
#[derive(Debug)]
pub struct Dense {
    weight: Tensor,
    bias: Tensor,
    activation: Activation,
}

impl Dense {
    /// Creates a layer with Glorot-normal weights and zero bias.
    pub fn new(in_features: usize, out_features: usize, activation: Activation) -> Self {
        Dense::with_rng(in_features, out_features, activation, &mut rand::thread_rng())
    }

    /// Same as [`Dense::new`], drawing the initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        debug!(
            "Dense: initialising {} -> {} ({})",
            in_features, out_features, activation
        );
        let weight = glorot_normal(in_features, out_features, rng);
        weight.set_requires_grad(true);
        let bias = zeros(&[out_features]);
        bias.set_requires_grad(true);
        Dense {
            weight,
            bias,
            activation,
        }
    }

    /// Builds a layer from existing parameters. Both are switched to gradient tracking.
    ///
    /// # Errors
    /// Returns `TensorGradError::ShapeMismatch` unless `weight` is 2-D and `bias` is
    /// `(weight.shape()[1],)`.
    pub fn from_parts(
        weight: Tensor,
        bias: Tensor,
        activation: Activation,
    ) -> Result<Self, TensorGradError> {
        let w_shape = weight.shape();
        if w_shape.len() != 2 {
            return Err(TensorGradError::ShapeMismatch {
                expected: vec![0, 0],
                actual: w_shape,
                operation: "Dense::from_parts (weight must be 2-D)".to_string(),
            });
        }
        if bias.shape() != [w_shape[1]] {
            return Err(TensorGradError::ShapeMismatch {
                expected: vec![w_shape[1]],
                actual: bias.shape(),
                operation: "Dense::from_parts (bias)".to_string(),
            });
        }
        weight.set_requires_grad(true);
        bias.set_requires_grad(true);
        Ok(Dense {
            weight,
            bias,
            activation,
        })
    }

    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn in_features(&self) -> usize {
        self.weight.shape()[0]
    }

    pub fn out_features(&self) -> usize {
        self.weight.shape()[1]
    }
}

impl Module for Dense {
    fn forward(&self, input: &Tensor) -> Result<Tensor, TensorGradError> {
        let affine = add_op(matmul_op(input, &self.weight)?, &self.bias)?;
        self.activation.apply(&affine)
    }

    fn parameters(&self) -> Vec<Tensor> {
        vec![self.weight.clone(), self.bias.clone()]
    }
}

impl fmt::Display for Dense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dense(in_features={}, out_features={}, activation={})",
            self.in_features(),
            self.out_features(),
            self.activation
        )
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
