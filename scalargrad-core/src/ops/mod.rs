// Declare op sub-modules
pub mod activation;
pub mod arithmetic;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, mul_op, neg_op, pow_op, sub_op};

use crate::error::ScalarGradError;
use crate::tape::{IntoOperand, Tape, ValueId};

/// Convenience methods over the free `*_op` functions. The second operand of
/// the binary ops accepts either a recorded [`ValueId`] or a plain `f64`
/// literal, which gets wrapped as a fresh leaf.
impl Tape {
    pub fn add(&mut self, a: ValueId, b: impl IntoOperand) -> ValueId {
        let b = b.into_operand(self);
        add_op(self, a, b)
    }

    pub fn mul(&mut self, a: ValueId, b: impl IntoOperand) -> ValueId {
        let b = b.into_operand(self);
        mul_op(self, a, b)
    }

    pub fn sub(&mut self, a: ValueId, b: impl IntoOperand) -> ValueId {
        let b = b.into_operand(self);
        sub_op(self, a, b)
    }

    /// See [`pow_op`]. The exponent is a constant, not a node.
    pub fn pow(&mut self, a: ValueId, exponent: f64) -> Result<ValueId, ScalarGradError> {
        pow_op(self, a, exponent)
    }

    pub fn neg(&mut self, a: ValueId) -> ValueId {
        neg_op(self, a)
    }

    pub fn tanh(&mut self, a: ValueId) -> ValueId {
        tanh_op(self, a)
    }

    pub fn relu(&mut self, a: ValueId) -> ValueId {
        relu_op(self, a)
    }
}
