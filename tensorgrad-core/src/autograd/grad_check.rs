use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::tensor::Tensor;
use approx::relative_eq;
use log::trace;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input tensor at index {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Input tensor {input_index} requires grad but has no gradient after backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Gradient check input tensor must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}.")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
    },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
    #[error("Output gradient shape {actual:?} does not match function output shape {expected:?}")]
    OutputGradShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Tensor error during gradient check: {0}")]
    TensorError(TensorGradError),
}

impl From<TensorGradError> for GradCheckError {
    fn from(err: TensorGradError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// `Σ output ⊙ output_grad`, the scalar whose derivative the checker estimates.
fn weighted_sum(output: &Buffer, output_grad: &Buffer) -> Result<f64, TensorGradError> {
    Ok(output.mul(output_grad)?.sum())
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` is evaluated once with `inputs` and back-propagated with `output_grad`.
/// Then every element of every tracked input is nudged by `±epsilon` (on a fresh,
/// untracked copy, so the originals keep their data and gradients) and the numerical
/// estimate `(L(x+ε) − L(x−ε)) / 2ε` of `L = Σ func(inputs) ⊙ output_grad` is
/// compared with the analytical gradient using a relative tolerance.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    output_grad: &Buffer,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, TensorGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs)?;
    if output.shape() != output_grad.shape() {
        return Err(GradCheckError::OutputGradShape {
            expected: output.shape(),
            actual: output_grad.shape().to_vec(),
        });
    }
    let any_input_requires_grad = inputs.iter().any(|t| t.requires_grad());
    if any_input_requires_grad && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    output.backward(Some(output_grad))?;

    for (i, input) in inputs.iter().enumerate() {
        if !input.requires_grad() {
            continue;
        }
        let analytical = input
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?;
        let original = input.data();

        for elem_idx in 0..original.numel() {
            let evaluate = |delta: f64| -> Result<f64, TensorGradError> {
                let mut values = original.as_slice().to_vec();
                values[elem_idx] += delta;
                let perturbed = Tensor::new(values, original.shape().to_vec())?;
                let mut perturbed_inputs = inputs.to_vec();
                perturbed_inputs[i] = perturbed;
                weighted_sum(&func(&perturbed_inputs)?.data(), output_grad)
            };
            let loss_plus = evaluate(epsilon)?;
            let loss_minus = evaluate(-epsilon)?;
            let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index: i,
                    element_index: elem_idx,
                });
            }

            let analytical_value = analytical.as_slice()[elem_idx];
            trace!(
                "check_grad: input {} elem {} analytical {} numerical {}",
                i,
                elem_idx,
                analytical_value,
                numerical
            );
            if !relative_eq!(
                analytical_value,
                numerical,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad: analytical_value,
                    numerical_grad: numerical,
                    difference: (analytical_value - numerical).abs(),
                });
            }
        }
    }
    Ok(())
}
