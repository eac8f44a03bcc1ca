use scalargrad_core::nn::Parameter;
use scalargrad_core::Tape;

// Define modules for optimizers
pub mod sgd;

pub use sgd::Sgd;

/// Trait for optimization algorithms.
/// Optimizers update the parameters of a model based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// # Arguments
    /// * `tape` - The tape holding the parameter nodes.
    /// * `params` - The model parameters to be updated.
    fn step(&mut self, tape: &mut Tape, params: &[Parameter]);

    /// Clears the gradients of the given parameters.
    /// Should be called before the backward pass to avoid accumulating
    /// gradients from multiple iterations.
    fn zero_grad(&self, tape: &mut Tape, params: &[Parameter]) {
        for param in params {
            param.zero_grad(tape);
        }
    }
}
