// scalargrad-core/src/ops/activation/relu.rs

use crate::node::Op;
use crate::tape::{Tape, ValueId};

/// Records `max(a, 0)` as a new node.
///
/// The backward rule passes the output gradient through only where the
/// *input* was strictly positive; at `a <= 0` the contribution is zero.
pub fn relu_op(tape: &mut Tape, a: ValueId) -> ValueId {
    let value = tape.value(a).max(0.0);
    tape.record(value, Op::Relu(a))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
