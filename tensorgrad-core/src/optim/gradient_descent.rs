use crate::error::TensorGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::tensor::Tensor;
use log::{debug, warn};

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Plain gradient descent: `θ ← θ − lr · ∇θ`.
#[derive(Debug)]
pub struct GradientDescent {
    params: Vec<Tensor>,
    lr: f64,
}

impl GradientDescent {
    /// # Arguments
    /// * `params`: parameters to optimise, typically `model.parameters()`.
    /// * `lr`: the learning rate.
    pub fn new(params: impl IntoIterator<Item = Tensor>, lr: f64) -> Self {
        GradientDescent {
            params: params.into_iter().collect(),
            lr,
        }
    }

    /// Uses [`DEFAULT_LEARNING_RATE`].
    pub fn with_default_lr(params: impl IntoIterator<Item = Tensor>) -> Self {
        GradientDescent::new(params, DEFAULT_LEARNING_RATE)
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for GradientDescent {
    /// Replaces each parameter's data through `Tensor::set_data`, which also clears
    /// its gradient. Parameters without a gradient are left untouched.
    fn step(&mut self) -> Result<(), TensorGradError> {
        debug!(
            "GradientDescent: step over {} parameters (lr={})",
            self.params.len(),
            self.lr
        );
        for (i, param) in self.params.iter().enumerate() {
            if !param.requires_grad() {
                continue;
            }
            let grad = match param.grad() {
                Some(grad) => grad,
                None => {
                    warn!("GradientDescent: parameter {} has no gradient, skipping", i);
                    continue;
                }
            };
            let updated = param.data().sub(&grad.scale(self.lr))?;
            param.set_data(updated);
        }
        Ok(())
    }

    fn params(&self) -> &[Tensor] {
        &self.params
    }
}
