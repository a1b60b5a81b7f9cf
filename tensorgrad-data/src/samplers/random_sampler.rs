use super::traits::Sampler;
use log::{trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Visits every index exactly once, in a random order.
///
/// Without a seed each epoch draws from the thread RNG. With a seed, the `n`-th call to
/// `iter` is shuffled by an RNG seeded with `seed + n`: a fresh sampler with the same
/// seed replays the same sequence of epochs, and consecutive epochs differ.
#[derive(Debug)]
pub struct RandomSampler {
    seed: Option<u64>,
    num_samples: Option<usize>,
    epoch: AtomicU64,
}

impl RandomSampler {
    /// Unseeded sampler over the whole dataset.
    pub fn new() -> Self {
        RandomSampler {
            seed: None,
            num_samples: None,
            epoch: AtomicU64::new(0),
        }
    }

    /// Reproducible sampler.
    pub fn seeded(seed: u64) -> Self {
        RandomSampler {
            seed: Some(seed),
            ..RandomSampler::new()
        }
    }

    /// Limits each epoch to the first `num_samples` indices of the permutation.
    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = Some(num_samples);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        RandomSampler::new()
    }
}

impl Clone for RandomSampler {
    fn clone(&self) -> Self {
        RandomSampler {
            seed: self.seed,
            num_samples: self.num_samples,
            epoch: AtomicU64::new(self.epoch.load(Ordering::Relaxed)),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        match self.seed {
            Some(seed) => {
                let epoch = self.epoch.fetch_add(1, Ordering::Relaxed);
                trace!("RandomSampler: epoch {} with seed {}", epoch, seed);
                indices.shuffle(&mut StdRng::seed_from_u64(seed.wrapping_add(epoch)));
            }
            None => indices.shuffle(&mut rand::thread_rng()),
        }
        indices.truncate(self.len(dataset_len));
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        match self.num_samples {
            Some(n) if n > dataset_len => {
                warn!(
                    "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, using {}",
                    n, dataset_len, dataset_len
                );
                dataset_len
            }
            Some(n) => n,
            None => dataset_len,
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
