use crate::error::ScalarGradError;
use crate::tape::{Tape, ValueId};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a scalar expression over leaves created from `inputs` on a
/// fresh tape. One analytical pass computes `d(output)/d(input_i)` via
/// [`Tape::backward`]; then each input is perturbed by `±epsilon` on its own
/// fresh tape and the slope `(f(x+ε) - f(x-ε)) / 2ε` is compared against the
/// analytical value with a combined absolute/relative tolerance.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Tape, &[ValueId]) -> Result<ValueId, ScalarGradError>,
{
    // --- Analytical pass ---
    let mut tape = Tape::new();
    let ids: Vec<ValueId> = inputs.iter().map(|&v| tape.leaf(v)).collect();
    let output = func(&mut tape, &ids)?;
    tape.backward(output);
    let analytical: Vec<f64> = ids.iter().map(|&id| tape.grad(id)).collect();

    // --- Numerical passes, one perturbed rebuild per direction ---
    let eval = |perturbed: &[f64]| -> Result<f64, GradCheckError> {
        let mut tape = Tape::new();
        let ids: Vec<ValueId> = perturbed.iter().map(|&v| tape.leaf(v)).collect();
        let output = func(&mut tape, &ids)?;
        Ok(tape.value(output))
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let loss_plus = eval(&plus)?;

        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;
        let loss_minus = eval(&minus)?;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            let difference = (analytical_grad - numerical).abs();
            log::debug!(
                "grad check mismatch at input {}: analytical {} vs numerical {}",
                i,
                analytical_grad,
                numerical
            );
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: analytical_grad,
                numerical,
                difference,
            });
        }
    }

    Ok(())
}
