use approx::assert_abs_diff_eq;
use tensorgrad_core::{Buffer, Tensor};

// Each integration test binary compiles this module separately; not every helper is
// used by every binary.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn leaf(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new_with_grad(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn constant(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn assert_buffer_near(actual: &Buffer, expected_shape: &[usize], expected: &[f64]) {
    assert_eq!(actual.shape(), expected_shape, "shape mismatch");
    assert_eq!(actual.numel(), expected.len(), "length mismatch");
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-9);
    }
}
