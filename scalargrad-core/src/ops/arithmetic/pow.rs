// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::node::Op;
use crate::tape::{Tape, ValueId};

/// Records `a ^ exponent` as a new node. The exponent is a real constant,
/// not a node, and is stored inside the op tag for the backward rule
/// (`k * a^(k-1) * g`).
///
/// Fails with [`ScalarGradError::InvalidExponent`] for a non-finite exponent
/// (NaN or infinite), before anything is recorded on the tape.
pub fn pow_op(tape: &mut Tape, a: ValueId, exponent: f64) -> Result<ValueId, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent { exponent });
    }
    let value = tape.value(a).powf(exponent);
    Ok(tape.record(value, Op::Pow(a, exponent)))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
