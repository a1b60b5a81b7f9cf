//! # DataLoader
//!
//! Batches the samples of a [`Dataset`] in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use tensorgrad_core::Buffer;
//! use tensorgrad_data::{DataLoader, SequentialSampler, TensorDataset};
//!
//! let x = Buffer::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![3, 2])?;
//! let y = Buffer::from_vec(vec![0.0, 1.0, 0.0]);
//! let dataset = TensorDataset::new(x, y)?;
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false)?;
//! assert_eq!(loader.len(), 2);
//! for batch in loader.iter() {
//!     let (inputs, targets) = batch?;
//!     assert_eq!(inputs.shape()[1], 2);
//!     assert_eq!(inputs.shape()[0], targets.shape()[0]);
//! }
//! # Ok::<(), tensorgrad_core::TensorGradError>(())
//! ```

use crate::datasets::{Dataset, TensorDataset};
use crate::samplers::{RandomSampler, Sampler, SequentialSampler};
use log::debug;
use tensorgrad_core::{Buffer, Tensor, TensorGradError};

/// Groups dataset items into `(input, target)` batches.
///
/// Each batch stacks `batch_size` samples along a new first axis, so samples of shape
/// `s` give a batch of shape `(batch, s...)`. The last batch may be smaller unless
/// `drop_last` is set. Batches are untracked tensors.
#[derive(Debug)]
pub struct DataLoader<D, S> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D, S> DataLoader<D, S>
where
    D: Dataset<Item = (Buffer, Buffer)>,
    S: Sampler,
{
    /// Creates a new DataLoader.
    ///
    /// # Errors
    /// `InvalidArgument` if `batch_size` is zero.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, TensorGradError> {
        if batch_size == 0 {
            return Err(TensorGradError::InvalidArgument(
                "DataLoader batch_size must be at least 1".to_string(),
            ));
        }
        Ok(DataLoader {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }

    /// Number of batches one call to [`DataLoader::iter`] yields.
    pub fn len(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One epoch of batches. Each call asks the sampler for a fresh order.
    pub fn iter(&self) -> Batches<'_, D> {
        debug!(
            "DataLoader: new epoch over {} samples, batch_size {}",
            self.dataset.len(),
            self.batch_size
        );
        Batches {
            dataset: &self.dataset,
            indices: self.sampler.iter(self.dataset.len()),
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

impl DataLoader<TensorDataset, Box<dyn Sampler>> {
    /// Loader over paired arrays, shuffled every epoch when `shuffle` is set.
    pub fn from_arrays(
        x: Buffer,
        y: Buffer,
        batch_size: usize,
        shuffle: bool,
    ) -> Result<Self, TensorGradError> {
        let sampler: Box<dyn Sampler> = if shuffle {
            Box::new(RandomSampler::new())
        } else {
            Box::new(SequentialSampler::new())
        };
        DataLoader::new(TensorDataset::new(x, y)?, batch_size, sampler, false)
    }
}

/// Iterator over the batches of one epoch, see [`DataLoader::iter`].
pub struct Batches<'a, D> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
    batch_size: usize,
    drop_last: bool,
}

/// Stacks same-shaped samples along a new first axis.
fn stack(samples: &[Buffer]) -> Result<Buffer, TensorGradError> {
    let sample_shape = samples.first().map(|s| s.shape().to_vec()).unwrap_or_default();
    let mut data = Vec::with_capacity(samples.len() * sample_shape.iter().product::<usize>());
    for sample in samples {
        if sample.shape() != sample_shape.as_slice() {
            return Err(TensorGradError::ShapeMismatch {
                expected: sample_shape,
                actual: sample.shape().to_vec(),
                operation: "DataLoader batch stacking".to_string(),
            });
        }
        data.extend_from_slice(sample.as_slice());
    }
    let mut shape = Vec::with_capacity(sample_shape.len() + 1);
    shape.push(samples.len());
    shape.extend_from_slice(&sample_shape);
    Buffer::new(data, shape)
}

impl<'a, D> Iterator for Batches<'a, D>
where
    D: Dataset<Item = (Buffer, Buffer)>,
{
    type Item = Result<(Tensor, Tensor), TensorGradError>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices: Vec<usize> = self.indices.by_ref().take(self.batch_size).collect();
        if indices.is_empty() || (self.drop_last && indices.len() < self.batch_size) {
            return None;
        }

        let mut inputs = Vec::with_capacity(indices.len());
        let mut targets = Vec::with_capacity(indices.len());
        for idx in indices {
            match self.dataset.get(idx) {
                Ok((x, y)) => {
                    inputs.push(x);
                    targets.push(y);
                }
                Err(e) => return Some(Err(e)),
            }
        }
        let batch = stack(&inputs).and_then(|x| Ok((x, stack(&targets)?)));
        Some(batch.map(|(x, y)| (Tensor::from_buffer(x, false), Tensor::from_buffer(y, false))))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
