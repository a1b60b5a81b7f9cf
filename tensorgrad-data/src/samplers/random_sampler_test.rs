use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_is_a_permutation() {
    let sampler = RandomSampler::new();
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique, (0..10).collect());
}

#[test]
fn test_random_sampler_len() {
    assert_eq!(RandomSampler::new().len(10), 10);
    assert_eq!(RandomSampler::new().with_num_samples(4).len(10), 4);
    // Clamped: sampling is without replacement.
    assert_eq!(RandomSampler::new().with_num_samples(12).len(10), 10);
}

#[test]
fn test_random_sampler_num_samples_are_distinct() {
    let sampler = RandomSampler::seeded(3).with_num_samples(5);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 5);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    assert!(indices.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_empty_dataset() {
    assert_eq!(RandomSampler::new().iter(0).count(), 0);
    assert_eq!(RandomSampler::seeded(1).with_num_samples(5).iter(0).count(), 0);
}

#[test]
fn test_seeded_sampler_is_reproducible() {
    let a = RandomSampler::seeded(42);
    let b = RandomSampler::seeded(42);
    let a_epochs: Vec<Vec<usize>> = (0..3).map(|_| a.iter(50).collect()).collect();
    let b_epochs: Vec<Vec<usize>> = (0..3).map(|_| b.iter(50).collect()).collect();
    assert_eq!(a_epochs, b_epochs);
}

#[test]
fn test_seeded_sampler_changes_between_epochs() {
    let sampler = RandomSampler::seeded(42);
    let first: Vec<usize> = sampler.iter(50).collect();
    let second: Vec<usize> = sampler.iter(50).collect();
    assert_ne!(first, second);
}

#[test]
fn test_clone_continues_from_same_epoch() {
    let sampler = RandomSampler::seeded(9);
    let _ = sampler.iter(20);
    let clone = sampler.clone();
    assert_eq!(
        sampler.iter(20).collect::<Vec<_>>(),
        clone.iter(20).collect::<Vec<_>>()
    );
}
