// src/tensor/create.rs

use crate::buffer::Buffer;
use crate::tensor::Tensor;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a new leaf tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Tensor {
    Tensor::from_buffer(Buffer::zeros(shape), false)
}

/// Creates a new leaf tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Tensor {
    Tensor::from_buffer(Buffer::ones(shape), false)
}

pub fn full(shape: &[usize], value: f64) -> Tensor {
    Tensor::from_buffer(Buffer::full(shape, value), false)
}

/// Zeros with the same shape as `tensor`. The result never tracks gradients.
pub fn zeros_like(tensor: &Tensor) -> Tensor {
    zeros(&tensor.shape())
}

/// Ones with the same shape as `tensor`. The result never tracks gradients.
pub fn ones_like(tensor: &Tensor) -> Tensor {
    ones(&tensor.shape())
}

/// Samples from the standard normal distribution using `rng`.
pub fn randn_with_rng<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Tensor {
    Tensor::from_buffer(Buffer::from_fn(shape, || StandardNormal.sample(rng)), false)
}

/// Samples from the standard normal distribution using the thread-local RNG.
pub fn randn(shape: &[usize]) -> Tensor {
    randn_with_rng(shape, &mut rand::thread_rng())
}

/// Samples uniformly from `[low, high)` using the thread-local RNG.
pub fn rand_uniform(shape: &[usize], low: f64, high: f64) -> Tensor {
    let mut rng = rand::thread_rng();
    Tensor::from_buffer(Buffer::from_fn(shape, || rng.gen_range(low..high)), false)
}
