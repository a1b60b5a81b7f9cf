//! # tensorgrad-data
//!
//! Feeding data to `tensorgrad-core` models: indexable [`Dataset`]s, index
//! [`Sampler`]s and a [`DataLoader`] that stacks samples into `(input, target)`
//! tensor batches, plus the small preprocessing helpers in [`utils`].

pub mod dataloader;
pub mod datasets;
pub mod samplers;
pub mod utils;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, TensorDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use utils::{split_train_test, to_one_hot};
