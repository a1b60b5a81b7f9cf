use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over indices in `0..dataset_len`.
    ///
    /// Called once per epoch; stateful samplers may return a different order each time.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the number of indices `iter` yields for a dataset of `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        (**self).iter(dataset_len)
    }

    fn len(&self, dataset_len: usize) -> usize {
        (**self).len(dataset_len)
    }
}
