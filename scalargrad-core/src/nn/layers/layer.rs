use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tape::{Tape, ValueId};
use rand::Rng;

/// A fully-connected layer: `out_features` independent [`Neuron`]s over a
/// shared input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        tape: &mut Tape,
        rng: &mut R,
        in_features: usize,
        out_features: usize,
        nonlinear: bool,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(tape, rng, in_features, nonlinear))
            .collect();
        Layer { neurons }
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, tape: &mut Tape, input: &[ValueId]) -> Result<Vec<ValueId>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(tape, input))
            .collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}
