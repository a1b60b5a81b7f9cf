use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::tensor::Tensor;
use std::fmt;

/// Decision threshold used by [`Metric::binary_accuracy`].
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Accuracy metrics. They read values only and never touch the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Fraction of elements where the rounded prediction equals the target.
    Accuracy,
    /// Fraction of elements where `prediction > threshold` matches a 0/1 target.
    BinaryAccuracy { threshold: f64 },
    /// Fraction of rows whose arg-max (last axis) matches the one-hot target's.
    CategoricalAccuracy,
}

impl Metric {
    pub fn binary_accuracy() -> Self {
        Metric::BinaryAccuracy {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Computes the metric in `[0, 1]`.
    ///
    /// # Errors
    /// * `ShapeMismatch` if `predictions` and `target` have different shapes.
    /// * `InvalidArgument` if they are empty.
    pub fn compute(&self, predictions: &Tensor, target: &Tensor) -> Result<f64, TensorGradError> {
        let (p, t) = (predictions.data(), target.data());
        if p.shape() != t.shape() {
            return Err(TensorGradError::ShapeMismatch {
                expected: p.shape().to_vec(),
                actual: t.shape().to_vec(),
                operation: format!("{} metric", self),
            });
        }
        if p.numel() == 0 {
            return Err(TensorGradError::InvalidArgument(
                "cannot compute a metric on empty tensors".to_string(),
            ));
        }
        Ok(match *self {
            Metric::Accuracy => elementwise_hits(&p, &t, f64::round),
            Metric::BinaryAccuracy { threshold } => {
                elementwise_hits(&p, &t, |x| if x > threshold { 1.0 } else { 0.0 })
            }
            Metric::CategoricalAccuracy => {
                let predicted = p.argmax_last();
                let expected = t.argmax_last();
                let hits = predicted
                    .iter()
                    .zip(&expected)
                    .filter(|(a, b)| a == b)
                    .count();
                hits as f64 / predicted.len() as f64
            }
        })
    }
}

fn elementwise_hits<F: Fn(f64) -> f64>(predictions: &Buffer, target: &Buffer, decide: F) -> f64 {
    let hits = predictions
        .iter()
        .zip(target.iter())
        .filter(|(p, t)| decide(**p) == **t)
        .count();
    hits as f64 / predictions.numel() as f64
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Accuracy => write!(f, "accuracy"),
            Metric::BinaryAccuracy { threshold } => {
                write!(f, "binary_accuracy(threshold={})", threshold)
            }
            Metric::CategoricalAccuracy => write!(f, "categorical_accuracy"),
        }
    }
}
