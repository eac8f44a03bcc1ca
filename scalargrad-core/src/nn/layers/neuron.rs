use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::nn::init;
use crate::tape::{Tape, ValueId};
use rand::Rng;

/// A single scalar neuron: `relu(Σ wᵢ·xᵢ + b)`, or the raw affine sum when
/// `nonlinear` is false (used for the output layer).
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    in_features: usize,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a new Neuron. Weights start uniform in `(-1, 1)`, the bias
    /// at zero.
    pub fn new<R: Rng + ?Sized>(
        tape: &mut Tape,
        rng: &mut R,
        in_features: usize,
        nonlinear: bool,
    ) -> Self {
        let weights = (0..in_features)
            .map(|_| init::uniform(tape, rng, -1.0, 1.0))
            .collect();
        let bias = init::zero(tape);
        Neuron {
            weights,
            bias,
            in_features,
            nonlinear,
        }
    }

    /// Scalar forward pass: the weighted sum of the inputs plus bias, gated
    /// through ReLU when the neuron is nonlinear.
    ///
    /// # Errors
    /// `DimensionMismatch` if `input` does not have `in_features` elements.
    pub fn activate(&self, tape: &mut Tape, input: &[ValueId]) -> Result<ValueId, ScalarGradError> {
        if input.len() != self.in_features {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.in_features,
                actual: input.len(),
            });
        }

        let mut acc = self.bias.id();
        for (&x, w) in input.iter().zip(&self.weights) {
            let wx = tape.mul(w.id(), x);
            acc = tape.add(acc, wx);
        }

        Ok(if self.nonlinear { tape.relu(acc) } else { acc })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }
}

impl Module for Neuron {
    fn forward(&self, tape: &mut Tape, input: &[ValueId]) -> Result<Vec<ValueId>, ScalarGradError> {
        Ok(vec![self.activate(tape, input)?])
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.extend_from_slice(&self.weights);
        params.push(self.bias);
        params
    }
}
