//! Optimisers read gradients after `backward` and replace parameter values.
//! They never take part in graph construction.

pub mod gradient_descent;
pub mod optimizer_trait;

pub use gradient_descent::{GradientDescent, DEFAULT_LEARNING_RATE};
pub use optimizer_trait::Optimizer;
