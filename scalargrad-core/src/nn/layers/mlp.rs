use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tape::{Tape, ValueId};
use rand::Rng;

/// A multi-layer perceptron chaining fully-connected layers.
///
/// Hidden layers are ReLU-gated; the last layer stays linear so outputs are
/// not constrained to the positive half-line.
#[derive(Debug, Clone)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Builds an MLP taking `in_features` inputs through layers of the given
    /// sizes, e.g. `MLP::new(tape, rng, 3, &[4, 4, 1])`.
    ///
    /// # Errors
    /// `EmptyNetwork` if `layer_sizes` is empty.
    pub fn new<R: Rng + ?Sized>(
        tape: &mut Tape,
        rng: &mut R,
        in_features: usize,
        layer_sizes: &[usize],
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::EmptyNetwork);
        }

        let mut sizes = Vec::with_capacity(layer_sizes.len() + 1);
        sizes.push(in_features);
        sizes.extend_from_slice(layer_sizes);

        let last = layer_sizes.len() - 1;
        let layers = (0..layer_sizes.len())
            .map(|i| Layer::new(tape, rng, sizes[i], sizes[i + 1], i != last))
            .collect();

        Ok(MLP { layers })
    }
}

impl Module for MLP {
    fn forward(&self, tape: &mut Tape, input: &[ValueId]) -> Result<Vec<ValueId>, ScalarGradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(tape, &activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}
