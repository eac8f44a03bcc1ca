// scalargrad-core/src/ops/arithmetic/add.rs

use crate::node::Op;
use crate::tape::{Tape, ValueId};

/// Records `a + b` as a new node.
///
/// Reads both operand values, never mutates them. The backward rule routes
/// the output gradient to both operands unchanged.
pub fn add_op(tape: &mut Tape, a: ValueId, b: ValueId) -> ValueId {
    let value = tape.value(a) + tape.value(b);
    tape.record(value, Op::Add(a, b))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
