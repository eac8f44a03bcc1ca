// scalargrad-core/src/ops/arithmetic/sub.rs

use super::add::add_op;
use super::neg::neg_op;
use crate::tape::{Tape, ValueId};

/// Records `a - b`, derived as `a + (-b)`.
pub fn sub_op(tape: &mut Tape, a: ValueId, b: ValueId) -> ValueId {
    let neg_b = neg_op(tape, b);
    add_op(tape, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
