use super::traits::Dataset;
use tensorgrad_core::{Buffer, TensorGradError};

/// A dataset of paired input and target arrays.
///
/// Both arrays share their first dimension, which indexes samples. Item `i` is
/// `(inputs[i, ..], targets[i, ..])`, each with the first dimension removed.
#[derive(Debug, Clone)]
pub struct TensorDataset {
    inputs: Buffer,
    targets: Buffer,
}

impl TensorDataset {
    /// Creates a new `TensorDataset`.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if either array is 0-d.
    /// * `ShapeMismatch` if the first dimensions differ.
    pub fn new(inputs: Buffer, targets: Buffer) -> Result<Self, TensorGradError> {
        let (input_len, target_len) = match (inputs.shape().first(), targets.shape().first()) {
            (Some(&a), Some(&b)) => (a, b),
            _ => {
                return Err(TensorGradError::InvalidArgument(
                    "TensorDataset requires arrays with at least one dimension".to_string(),
                ))
            }
        };
        if input_len != target_len {
            return Err(TensorGradError::ShapeMismatch {
                expected: vec![input_len],
                actual: vec![target_len],
                operation: "TensorDataset::new (first dimension)".to_string(),
            });
        }
        Ok(TensorDataset { inputs, targets })
    }

    pub fn inputs(&self) -> &Buffer {
        &self.inputs
    }

    pub fn targets(&self) -> &Buffer {
        &self.targets
    }
}

/// Row `index` of `buffer` with the first dimension dropped.
fn row(buffer: &Buffer, index: usize) -> Result<Buffer, TensorGradError> {
    buffer
        .select_rows(&[index])?
        .reshape(&buffer.shape()[1..])
}

impl Dataset for TensorDataset {
    type Item = (Buffer, Buffer);

    fn get(&self, index: usize) -> Result<Self::Item, TensorGradError> {
        if index >= self.len() {
            return Err(TensorGradError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok((row(&self.inputs, index)?, row(&self.targets, index)?))
    }

    fn len(&self) -> usize {
        self.inputs.shape()[0]
    }
}

#[cfg(test)]
#[path = "tensor_dataset_test.rs"]
mod tests;
