use super::*;
use std::collections::HashSet;

fn dataset(n: usize) -> TensorDataset {
    let x = Buffer::new((0..2 * n).map(|v| v as f64).collect(), vec![n, 2]).unwrap();
    let y = Buffer::new((0..n).map(|v| v as f64).collect(), vec![n, 1]).unwrap();
    TensorDataset::new(x, y).unwrap()
}

fn collect(loader: &DataLoader<TensorDataset, impl Sampler>) -> Vec<(Tensor, Tensor)> {
    loader.iter().collect::<Result<Vec<_>, _>>().unwrap()
}

#[test]
fn test_dataloader_sequential() {
    let loader = DataLoader::new(dataset(5), 2, SequentialSampler::new(), false).unwrap();
    assert_eq!(loader.len(), 3);
    let batches = collect(&loader);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].0.shape(), vec![2, 2]);
    assert_eq!(batches[0].0.data().as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(batches[0].1.shape(), vec![2, 1]);
    assert_eq!(batches[1].1.data().as_slice(), &[2.0, 3.0]);
    // Last batch is short.
    assert_eq!(batches[2].0.shape(), vec![1, 2]);
    assert_eq!(batches[2].1.data().as_slice(), &[4.0]);
    assert!(!batches[0].0.requires_grad());
}

#[test]
fn test_dataloader_drop_last() {
    let loader = DataLoader::new(dataset(5), 2, SequentialSampler::new(), true).unwrap();
    assert_eq!(loader.len(), 2);
    let batches = collect(&loader);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].1.data().as_slice(), &[2.0, 3.0]);
}

#[test]
fn test_dataloader_rejects_zero_batch_size() {
    assert!(matches!(
        DataLoader::new(dataset(3), 0, SequentialSampler::new(), false),
        Err(TensorGradError::InvalidArgument(_))
    ));
}

#[test]
fn test_dataloader_empty_dataset() {
    let loader = DataLoader::new(dataset(0), 4, SequentialSampler::new(), false).unwrap();
    assert!(loader.is_empty());
    assert_eq!(loader.iter().count(), 0);
}

#[test]
fn test_dataloader_shuffled_epoch_covers_all_samples() {
    let loader = DataLoader::new(dataset(7), 3, RandomSampler::seeded(5), false).unwrap();
    let seen: HashSet<u64> = collect(&loader)
        .iter()
        .flat_map(|(_, y)| y.iter().map(|v| v as u64).collect::<Vec<_>>())
        .collect();
    assert_eq!(seen, (0..7).collect());
}

#[test]
fn test_dataloader_keeps_inputs_and_targets_paired() {
    let loader = DataLoader::new(dataset(6), 4, RandomSampler::seeded(11), false).unwrap();
    for (x, y) in collect(&loader) {
        let xs = x.data();
        for (row, &label) in y.data().as_slice().iter().enumerate() {
            assert_eq!(xs.as_slice()[2 * row], 2.0 * label);
        }
    }
}

#[test]
fn test_from_arrays() {
    let x = Buffer::new(vec![1.0, 2.0, 3.0, 4.0], vec![4, 1]).unwrap();
    let y = Buffer::from_vec(vec![0.0, 1.0, 0.0, 1.0]);
    let loader = DataLoader::from_arrays(x.clone(), y.clone(), 3, false).unwrap();
    assert_eq!(loader.len(), 2);
    let batches = collect(&loader);
    assert_eq!(batches[0].0.shape(), vec![3, 1]);
    assert_eq!(batches[0].1.shape(), vec![3]);

    let shuffled = DataLoader::from_arrays(x, y, 4, true).unwrap();
    let batches = collect(&shuffled);
    assert_eq!(batches.len(), 1);
    let mut values: Vec<f64> = batches[0].0.iter().collect();
    values.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_from_arrays_rejects_mismatched_lengths() {
    let x = Buffer::zeros(&[4, 1]);
    let y = Buffer::zeros(&[3]);
    assert!(DataLoader::from_arrays(x, y, 2, false).is_err());
}
