// scalargrad-core/src/ops/activation/tanh.rs

use crate::node::Op;
use crate::tape::{Tape, ValueId};

/// Records `tanh(a)` as a new node, computed as `(e^{2a} - 1) / (e^{2a} + 1)`.
///
/// The backward rule is `(1 - t^2) * g` where `t` is the *output* value, so
/// the dispatch reads the result node rather than recomputing the forward
/// expression.
pub fn tanh_op(tape: &mut Tape, a: ValueId) -> ValueId {
    let e = (2.0 * tape.value(a)).exp();
    let value = (e - 1.0) / (e + 1.0);
    tape.record(value, Op::Tanh(a))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
