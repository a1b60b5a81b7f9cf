use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tensorgrad_core::model::{train, TrainParameters};
use tensorgrad_core::nn::{Activation, Dense, Loss, Metric, Module};
use tensorgrad_core::optim::GradientDescent;
use tensorgrad_core::Buffer;
use tensorgrad_data::{DataLoader, RandomSampler, TensorDataset};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn loader_batches_drive_training() {
    init_logger();
    // y = 3x + 1 on 12 points, mini-batches of 4.
    let xs: Vec<f64> = (0..12).map(|i| i as f64 / 12.0 - 0.5).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 1.0).collect();
    let dataset = TensorDataset::new(
        Buffer::new(xs, vec![12, 1]).unwrap(),
        Buffer::new(ys, vec![12, 1]).unwrap(),
    )
    .unwrap();
    let loader = DataLoader::new(dataset, 4, RandomSampler::seeded(17), false).unwrap();
    assert_eq!(loader.len(), 3);

    let model = Dense::with_rng(1, 1, Activation::Identity, &mut StdRng::seed_from_u64(0));
    let mut params = TrainParameters::new(
        GradientDescent::new(model.parameters(), 0.2),
        Loss::Mse,
        Metric::Accuracy,
    );
    let history = train(&model, &mut params, || loader.iter(), 300, false).unwrap();

    assert_eq!(history.loss.len(), 300);
    assert!(history.loss[299] < 1e-3);
    assert_abs_diff_eq!(model.weight().item().unwrap(), 3.0, epsilon = 0.1);
    assert_abs_diff_eq!(model.bias().item().unwrap(), 1.0, epsilon = 0.1);
}
