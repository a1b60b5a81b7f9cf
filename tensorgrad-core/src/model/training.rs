use crate::error::TensorGradError;
use crate::nn::{Loss, Metric, Module};
use crate::optim::Optimizer;
use crate::tensor::Tensor;
use log::{debug, info};

/// Everything `train` needs besides the model and the data.
#[derive(Debug)]
pub struct TrainParameters<O: Optimizer> {
    pub optimizer: O,
    pub loss: Loss,
    pub metric: Metric,
}

impl<O: Optimizer> TrainParameters<O> {
    pub fn new(optimizer: O, loss: Loss, metric: Metric) -> Self {
        TrainParameters {
            optimizer,
            loss,
            metric,
        }
    }
}

/// Per-epoch averages over batches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    pub loss: Vec<f64>,
    pub accuracy: Vec<f64>,
}

/// Trains `model` for `epochs` epochs.
///
/// `batches` is called once per epoch and must yield that epoch's `(input, target)`
/// pairs (`tensorgrad_data::DataLoader::iter` fits). For each batch: gradients are zeroed,
/// the loss is computed and back-propagated, the optimiser steps, and the metric is
/// recorded. With `verbose` each epoch's averages are logged at `info` level.
///
/// # Errors
/// Any error raised by the data source, the model, the loss or the optimiser. An epoch
/// without batches is an `InvalidArgument`.
pub fn train<M, O, F, I>(
    model: &M,
    params: &mut TrainParameters<O>,
    mut batches: F,
    epochs: usize,
    verbose: bool,
) -> Result<History, TensorGradError>
where
    M: Module + ?Sized,
    O: Optimizer,
    F: FnMut() -> I,
    I: IntoIterator<Item = Result<(Tensor, Tensor), TensorGradError>>,
{
    let mut history = History::default();
    for epoch in 1..=epochs {
        let mut loss_sum = 0.0;
        let mut metric_sum = 0.0;
        let mut count = 0usize;

        for batch in batches() {
            let (x, y) = batch?;
            params.optimizer.zero_grad();
            let predictions = model.forward(&x)?;
            let loss = params.loss.compute(&predictions, &y)?;
            loss.backward(None)?;
            params.optimizer.step()?;

            loss_sum += loss.item()?;
            metric_sum += params.metric.compute(&predictions, &y)?;
            count += 1;
        }

        if count == 0 {
            return Err(TensorGradError::InvalidArgument(format!(
                "epoch {} produced no batches",
                epoch
            )));
        }
        let (epoch_loss, epoch_metric) = (loss_sum / count as f64, metric_sum / count as f64);
        history.loss.push(epoch_loss);
        history.accuracy.push(epoch_metric);

        if verbose {
            info!(
                "epoch {}/{}: loss = {:.6}, {} = {:.4}",
                epoch, epochs, epoch_loss, params.metric, epoch_metric
            );
        } else {
            debug!("epoch {}/{}: loss = {:.6}", epoch, epochs, epoch_loss);
        }
    }
    Ok(history)
}

/// Runs `model` on `x` and scores the predictions against `y`.
pub fn evaluate<M: Module + ?Sized>(
    model: &M,
    metric: Metric,
    x: &Tensor,
    y: &Tensor,
) -> Result<f64, TensorGradError> {
    let predictions = model.forward(x)?;
    metric.compute(&predictions, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sequential;
    use crate::nn::{Activation, Dense};
    use crate::optim::GradientDescent;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_train_fits_linear_map() {
        // y = 2x - 1 on a handful of points.
        let x = Tensor::new(vec![-1.0, -0.5, 0.0, 0.5, 1.0], vec![5, 1]).unwrap();
        let y = Tensor::new(vec![-3.0, -2.0, -1.0, 0.0, 1.0], vec![5, 1]).unwrap();
        let model = Dense::with_rng(1, 1, Activation::Identity, &mut StdRng::seed_from_u64(1));
        let mut params = TrainParameters::new(
            GradientDescent::new(model.parameters(), 0.3),
            Loss::Mse,
            Metric::Accuracy,
        );
        let history = train(
            &model,
            &mut params,
            || vec![Ok((x.clone(), y.clone()))],
            200,
            false,
        )
        .unwrap();
        assert_eq!(history.loss.len(), 200);
        assert!(history.loss[199] < 1e-6);
        assert!((model.weight().item().unwrap() - 2.0).abs() < 1e-3);
        assert!((model.bias().item().unwrap() + 1.0).abs() < 1e-3);
        assert_eq!(evaluate(&model, Metric::Accuracy, &x, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_train_propagates_batch_errors() {
        let model = Sequential::new();
        let mut params = TrainParameters::new(
            GradientDescent::new(Vec::<Tensor>::new(), 0.1),
            Loss::Mse,
            Metric::Accuracy,
        );
        let err = train(
            &model,
            &mut params,
            || -> Vec<Result<(Tensor, Tensor), TensorGradError>> {
                vec![Err(TensorGradError::InvalidArgument("bad batch".to_string()))]
            },
            1,
            true,
        )
        .unwrap_err();
        assert_eq!(err, TensorGradError::InvalidArgument("bad batch".to_string()));

        let no_batches = || Vec::<Result<(Tensor, Tensor), TensorGradError>>::new();
        let empty = train(&model, &mut params, no_batches, 1, false);
        assert!(matches!(empty, Err(TensorGradError::InvalidArgument(_))));
    }
}
