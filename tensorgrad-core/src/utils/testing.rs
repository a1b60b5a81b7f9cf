use crate::tensor::Tensor;
use approx::abs_diff_eq;

/// Checks that a tensor has `expected_shape` and values within `tolerance` of `expected_data`.
/// Panics with the first offending index otherwise.
pub(crate) fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    let actual_data = actual.data();
    assert_eq!(
        actual_data.numel(),
        expected_data.len(),
        "Data length mismatch"
    );
    for (i, (a, e)) in actual_data.iter().zip(expected_data).enumerate() {
        if !abs_diff_eq!(*a, *e, epsilon = tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, a, e, tolerance
            );
        }
    }
}
