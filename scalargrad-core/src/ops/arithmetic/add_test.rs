use super::add_op;
use crate::node::Op;
use crate::tape::Tape;

#[test]
fn test_add_forward_value() {
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(-3.5);
    let out = add_op(&mut tape, a, b);
    assert_eq!(tape.value(out), -1.5);
    assert_eq!(tape.node(out).op(), Op::Add(a, b));
}

#[test]
fn test_add_does_not_mutate_operands() {
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(3.0);
    let _ = add_op(&mut tape, a, b);
    assert_eq!(tape.value(a), 2.0);
    assert_eq!(tape.value(b), 3.0);
}

#[test]
fn test_add_backward_routes_gradient_to_both_operands() {
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(3.0);
    let out = add_op(&mut tape, a, b);

    tape.backward(out);
    assert_eq!(tape.grad(out), 1.0);
    assert_eq!(tape.grad(a), 1.0);
    assert_eq!(tape.grad(b), 1.0);
}
