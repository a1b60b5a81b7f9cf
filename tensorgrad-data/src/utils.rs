//! Preprocessing helpers for paired `(x, y)` arrays.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use tensorgrad_core::{Buffer, TensorGradError};

/// Shuffles the rows of `x` and `y` together, then splits them into a train and a
/// test set. With `at = 0.8` the train set holds `floor(0.8 * n)` rows and the test
/// set the rest.
///
/// Returns `(x_train, y_train, x_test, y_test)`.
///
/// # Errors
/// * `InvalidArgument` if `at` is outside `[0, 1]`.
/// * `ShapeMismatch` if `x` and `y` have different first dimensions.
pub fn split_train_test(
    x: &Buffer,
    y: &Buffer,
    at: f64,
) -> Result<(Buffer, Buffer, Buffer, Buffer), TensorGradError> {
    split_train_test_with_rng(x, y, at, &mut rand::thread_rng())
}

/// Same as [`split_train_test`], shuffling with `rng`.
pub fn split_train_test_with_rng<R: Rng + ?Sized>(
    x: &Buffer,
    y: &Buffer,
    at: f64,
    rng: &mut R,
) -> Result<(Buffer, Buffer, Buffer, Buffer), TensorGradError> {
    if !(0.0..=1.0).contains(&at) {
        return Err(TensorGradError::InvalidArgument(format!(
            "split ratio must be in [0, 1], got {}",
            at
        )));
    }
    let n = x.shape().first().copied().unwrap_or(0);
    let y_len = y.shape().first().copied().unwrap_or(0);
    if n != y_len {
        return Err(TensorGradError::ShapeMismatch {
            expected: vec![n],
            actual: vec![y_len],
            operation: "split_train_test (first dimension)".to_string(),
        });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    let split = (at * n as f64).floor() as usize;
    let (train, test) = indices.split_at(split);
    debug!("split_train_test: {} train / {} test rows", train.len(), test.len());

    Ok((
        x.select_rows(train)?,
        y.select_rows(train)?,
        x.select_rows(test)?,
        y.select_rows(test)?,
    ))
}

/// One-hot encodes `labels`.
///
/// The distinct label values, sorted ascending, are mapped to columns `0..classes`.
/// The result has shape `(labels.numel(), classes)`.
pub fn to_one_hot(labels: &Buffer) -> Result<Buffer, TensorGradError> {
    let mut classes: Vec<f64> = labels.iter().copied().collect();
    classes.sort_by(|a, b| a.total_cmp(b));
    classes.dedup();

    let n = labels.numel();
    let mut data = vec![0.0; n * classes.len()];
    for (row, label) in labels.iter().enumerate() {
        // Every label is present in `classes`.
        if let Ok(col) = classes.binary_search_by(|c| c.total_cmp(label)) {
            data[row * classes.len() + col] = 1.0;
        }
    }
    Buffer::new(data, vec![n, classes.len()])
}
