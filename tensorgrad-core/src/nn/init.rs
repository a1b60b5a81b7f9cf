//! Parameter initialisation.

use crate::tensor::create::randn_with_rng;
use crate::tensor::Tensor;
use rand::Rng;

/// Glorot (Xavier) normal initialisation for a `(fan_in, fan_out)` weight matrix:
/// samples from `N(0, 2 / (fan_in + fan_out))`.
pub fn glorot_normal<R: Rng + ?Sized>(fan_in: usize, fan_out: usize, rng: &mut R) -> Tensor {
    let std = (2.0 / (fan_in + fan_out).max(1) as f64).sqrt();
    let weights = randn_with_rng(&[fan_in, fan_out], rng);
    Tensor::from_buffer(weights.data().scale(std), false)
}
