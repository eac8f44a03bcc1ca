use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::tape::{Tape, ValueId};

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// A module composes engine operations on a caller-provided [`Tape`] and
/// owns a flat collection of trainable [`Parameter`]s. Inputs and outputs
/// are node ids on the same tape.
pub trait Module {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `ScalarGradError` if the input does not match the module's
    /// expected width.
    fn forward(&self, tape: &mut Tape, input: &[ValueId]) -> Result<Vec<ValueId>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules, in a stable order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Sets every parameter's gradient to 0.
    ///
    /// Must be called before each `backward` invocation across which
    /// accumulation should not carry over; the engine itself never resets
    /// gradients.
    fn zero_grad(&self, tape: &mut Tape) {
        for param in self.parameters() {
            param.zero_grad(tape);
        }
    }
}
