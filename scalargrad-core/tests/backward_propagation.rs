// End-to-end checks of the backward engine through the public API.

use scalargrad_core::Tape;

#[test]
fn test_chain_rule_composition() {
    // c = a + b; L = c * d
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(3.0);
    let d = tape.leaf(4.0);
    let c = tape.add(a, b);
    let loss = tape.mul(c, d);

    tape.backward(loss);

    assert_eq!(tape.value(loss), 20.0);
    assert_eq!(tape.grad(d), tape.value(c)); // dL/dd = c
    assert_eq!(tape.grad(c), tape.value(d)); // dL/dc = d
    assert_eq!(tape.grad(a), tape.value(d)); // dL/da = d * 1
    assert_eq!(tape.grad(b), tape.value(d)); // dL/db = d * 1
}

#[test]
fn test_shared_node_accumulates_both_paths() {
    // b = a * a: the single node a is consumed twice, so its gradient is
    // the sum of both contributions, 2a, not a.
    let mut tape = Tape::new();
    let a = tape.leaf(4.0);
    let b = tape.mul(a, a);

    tape.backward(b);
    assert_eq!(tape.grad(a), 8.0);
}

#[test]
fn test_subtraction_end_to_end() {
    let mut tape = Tape::new();
    let a = tape.leaf(5.0);
    let b = tape.leaf(-2.0);
    let out = tape.sub(a, b);

    tape.backward(out);

    assert_eq!(tape.value(out), 7.0);
    assert_eq!(tape.grad(a), 1.0);
    assert_eq!(tape.grad(b), -1.0);
}

#[test]
fn test_relu_gating() {
    let mut tape = Tape::new();
    let x = tape.leaf(-3.0);
    let y = tape.relu(x);
    tape.backward(y);
    assert_eq!(tape.value(y), 0.0);
    assert_eq!(tape.grad(x), 0.0);

    let mut tape = Tape::new();
    let x = tape.leaf(3.0);
    let y = tape.relu(x);
    tape.backward(y);
    assert_eq!(tape.value(y), 3.0);
    assert_eq!(tape.grad(x), 1.0);
}

#[test]
fn test_two_level_expression() {
    // L = (a*b + c) * f
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(-3.0);
    let c = tape.leaf(10.0);
    let f = tape.leaf(-2.0);

    let e = tape.mul(a, b);
    let d = tape.add(e, c);
    let loss = tape.mul(d, f);

    tape.backward(loss);

    assert_eq!(tape.value(loss), -8.0);
    assert_eq!(tape.grad(f), 4.0); // d
    assert_eq!(tape.grad(d), -2.0); // f
    assert_eq!(tape.grad(c), -2.0);
    assert_eq!(tape.grad(a), 6.0); // f * b
    assert_eq!(tape.grad(b), -4.0); // f * a
}

#[test]
fn test_literal_operands_mix_with_nodes() {
    // 3x^2 + 2x + 1 at x = 2 -> value 17, slope 14
    let mut tape = Tape::new();
    let x = tape.leaf(2.0);

    let x2 = tape.pow(x, 2.0).unwrap();
    let term2 = tape.mul(x2, 3.0);
    let term1 = tape.mul(x, 2.0);
    let partial = tape.add(term2, term1);
    let y = tape.add(partial, 1.0);

    tape.backward(y);

    assert_eq!(tape.value(y), 17.0);
    assert_eq!(tape.grad(x), 14.0);
}

#[test]
fn test_tanh_saturates_toward_one() {
    let mut tape = Tape::new();
    let x = tape.leaf(10.0);
    let y = tape.tanh(x);

    tape.backward(y);
    assert!(tape.value(y) > 0.9999);
    // derivative 1 - t^2 is tiny in the saturated regime
    assert!(tape.grad(x) < 1e-8);
}
