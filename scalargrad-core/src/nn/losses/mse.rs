// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::tape::{Tape, ValueId};

/// Specifies the reduction to apply to the output:
/// sum or mean of the per-example squared errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Squared-error loss over a batch of scalar predictions.
///
/// The reduction is built from engine primitives only (`sub`, `pow`, `add`,
/// and a constant `mul` for the mean), so the loss node backpropagates like
/// any other node.
#[derive(Debug, Clone)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Reduces predictions and plain-number targets into a single scalar
    /// loss node.
    ///
    /// # Errors
    /// `DimensionMismatch` if the slices differ in length, `EmptyBatch` for
    /// zero examples.
    pub fn calculate(
        &self,
        tape: &mut Tape,
        predictions: &[ValueId],
        targets: &[f64],
    ) -> Result<ValueId, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyBatch);
        }

        let mut total = {
            let diff = tape.sub(predictions[0], targets[0]);
            tape.pow(diff, 2.0)?
        };
        for (&prediction, &target) in predictions[1..].iter().zip(&targets[1..]) {
            let diff = tape.sub(prediction, target);
            let squared = tape.pow(diff, 2.0)?;
            total = tape.add(total, squared);
        }

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => tape.mul(total, 1.0 / predictions.len() as f64),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
