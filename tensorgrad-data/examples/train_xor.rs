//! # Training a small classifier on a noisy XOR problem
//!
//! Points are drawn uniformly in `[-1, 1]²` and labelled by the sign of `x · y`.
//! The example shows the full pipeline:
//!
//! 1. one-hot encoding of labels and a shuffled train/test split,
//! 2. a shuffling `DataLoader`,
//! 3. a `Sequential` model trained with `GradientDescent` and categorical crossentropy,
//! 4. evaluation on the held-out split.
//!
//! Run with `RUST_LOG=info cargo run --example train_xor` to see per-epoch progress.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tensorgrad_core::model::{evaluate, train, Sequential, TrainParameters};
use tensorgrad_core::nn::{Activation, Dense, Loss, Metric, Module};
use tensorgrad_core::optim::GradientDescent;
use tensorgrad_core::{Buffer, Tensor, TensorGradError};
use tensorgrad_data::utils::split_train_test_with_rng;
use tensorgrad_data::{to_one_hot, DataLoader};

const SAMPLES: usize = 400;
const EPOCHS: usize = 200;

fn make_xor(rng: &mut StdRng) -> Result<(Buffer, Buffer), TensorGradError> {
    let mut points = Vec::with_capacity(2 * SAMPLES);
    let mut labels = Vec::with_capacity(SAMPLES);
    for _ in 0..SAMPLES {
        let (a, b): (f64, f64) = (rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        points.extend([a, b]);
        labels.push(if a * b > 0.0 { 1.0 } else { 0.0 });
    }
    let x = Buffer::new(points, vec![SAMPLES, 2])?;
    let y = to_one_hot(&Buffer::from_vec(labels))?;
    Ok((x, y))
}

fn main() -> Result<(), TensorGradError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(2024);

    let (x, y) = make_xor(&mut rng)?;
    let (x_train, y_train, x_test, y_test) = split_train_test_with_rng(&x, &y, 0.8, &mut rng)?;
    let loader = DataLoader::from_arrays(x_train, y_train, 32, true)?;

    let model = Sequential::from_layers(vec![
        Box::new(Dense::with_rng(2, 16, Activation::Tanh, &mut rng)),
        Box::new(Dense::with_rng(16, 2, Activation::Softmax, &mut rng)),
    ]);
    info!("model: {}", model);

    let mut params = TrainParameters::new(
        GradientDescent::new(model.parameters(), 0.5),
        Loss::CategoricalCrossentropy,
        Metric::CategoricalAccuracy,
    );
    let history = train(&model, &mut params, || loader.iter(), EPOCHS, true)?;

    let test_accuracy = evaluate(
        &model,
        Metric::CategoricalAccuracy,
        &Tensor::from_buffer(x_test, false),
        &Tensor::from_buffer(y_test, false),
    )?;
    println!(
        "final train loss {:.4}, train accuracy {:.3}, test accuracy {:.3}",
        history.loss.last().copied().unwrap_or(f64::NAN),
        history.accuracy.last().copied().unwrap_or(f64::NAN),
        test_accuracy
    );
    Ok(())
}
