mod common;

use common::{constant, init_logger};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tensorgrad_core::model::{evaluate, train, Sequential, TrainParameters};
use tensorgrad_core::nn::{Activation, Dense, Flatten, Loss, Metric, Module};
use tensorgrad_core::optim::{GradientDescent, Optimizer};

#[test]
fn logistic_regression_learns_and_gate() {
    init_logger();
    let x = constant(vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0], vec![4, 2]);
    let y = constant(vec![0.0, 0.0, 0.0, 1.0], vec![4, 1]);
    let mut rng = StdRng::seed_from_u64(7);
    let model = Dense::with_rng(2, 1, Activation::Sigmoid, &mut rng);

    let mut params = TrainParameters::new(
        GradientDescent::new(model.parameters(), 1.0),
        Loss::BinaryCrossentropy,
        Metric::binary_accuracy(),
    );
    let history = train(&model, &mut params, || vec![Ok((x.clone(), y.clone()))], 1000, false).unwrap();

    assert_eq!(history.loss.len(), 1000);
    assert!(history.loss[999] < history.loss[0]);
    assert_eq!(evaluate(&model, Metric::binary_accuracy(), &x, &y).unwrap(), 1.0);
}

#[test]
fn hidden_layer_model_reduces_xor_loss() {
    init_logger();
    let x = constant(vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0], vec![4, 2]);
    let y = constant(vec![0.0, 1.0, 1.0, 0.0], vec![4, 1]);
    let mut rng = StdRng::seed_from_u64(42);
    let model = Sequential::from_layers(vec![
        Box::new(Dense::with_rng(2, 8, Activation::Tanh, &mut rng)),
        Box::new(Dense::with_rng(8, 1, Activation::Sigmoid, &mut rng)),
    ]);
    assert_eq!(model.parameters().len(), 4);

    let mut params = TrainParameters::new(
        GradientDescent::new(model.parameters(), 0.5),
        Loss::Mse,
        Metric::binary_accuracy(),
    );
    let history = train(&model, &mut params, || vec![Ok((x.clone(), y.clone()))], 300, true).unwrap();
    assert!(history.loss.iter().all(|l| l.is_finite()));
    assert!(history.loss[299] < history.loss[0]);
}

#[test]
fn softmax_classifier_on_flattened_input() {
    init_logger();
    // Three well separated classes, each sample a (2, 1) "image".
    let x = constant(
        vec![2.0, 0.0, 1.8, 0.2, 0.0, 2.0, 0.1, 1.9, -2.0, -2.0, -1.9, -2.1],
        vec![6, 2, 1],
    );
    let y = constant(
        vec![
            1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
            1.0,
        ],
        vec![6, 3],
    );
    let mut rng = StdRng::seed_from_u64(3);
    let mut model = Sequential::new();
    model.add(Box::new(Flatten::new()));
    model.add(Box::new(Dense::with_rng(2, 3, Activation::Softmax, &mut rng)));

    let mut params = TrainParameters::new(
        GradientDescent::new(model.parameters(), 0.5),
        Loss::CategoricalCrossentropy,
        Metric::CategoricalAccuracy,
    );
    let history = train(&model, &mut params, || vec![Ok((x.clone(), y.clone()))], 200, false).unwrap();

    assert!(history.loss[199] < history.loss[0]);
    assert_eq!(evaluate(&model, Metric::CategoricalAccuracy, &x, &y).unwrap(), 1.0);
    // The last step's gradients were consumed by `set_data`.
    assert!(params.optimizer.params().iter().all(|p| p.grad().is_none()));
}
