use crate::error::TensorGradError;
use crate::ops::activation::{leaky_relu_op, relu_op, sigmoid_op, softmax_op, tanh_op};
use crate::tensor::Tensor;
use std::fmt;

/// Activation applied by a [`Dense`](crate::nn::Dense) layer after its affine map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Activation {
    #[default]
    Identity,
    Sigmoid,
    Tanh,
    Relu,
    LeakyRelu {
        alpha: f64,
    },
    /// Softmax over the last axis, one distribution per batch row.
    Softmax,
}

impl Activation {
    pub fn apply(&self, input: &Tensor) -> Result<Tensor, TensorGradError> {
        match *self {
            Activation::Identity => Ok(input.clone()),
            Activation::Sigmoid => sigmoid_op(input),
            Activation::Tanh => tanh_op(input),
            Activation::Relu => relu_op(input),
            Activation::LeakyRelu { alpha } => leaky_relu_op(input, alpha),
            Activation::Softmax => softmax_op(input),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Identity => write!(f, "identity"),
            Activation::Sigmoid => write!(f, "sigmoid"),
            Activation::Tanh => write!(f, "tanh"),
            Activation::Relu => write!(f, "relu"),
            Activation::LeakyRelu { alpha } => write!(f, "leaky_relu(alpha={})", alpha),
            Activation::Softmax => write!(f, "softmax"),
        }
    }
}
