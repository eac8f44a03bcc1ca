use super::pow_op;
use crate::error::ScalarGradError;
use crate::tape::Tape;

#[test]
fn test_pow_forward_value() {
    let mut tape = Tape::new();
    let a = tape.leaf(3.0);
    let out = pow_op(&mut tape, a, 2.0).unwrap();
    assert_eq!(tape.value(out), 9.0);
}

#[test]
fn test_pow_backward_rule() {
    // d(a^3)/da = 3 * a^2 = 12 at a = 2
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let out = pow_op(&mut tape, a, 3.0).unwrap();

    tape.backward(out);
    assert_eq!(tape.grad(a), 12.0);
}

#[test]
fn test_pow_negative_exponent() {
    // d(a^-1)/da = -a^-2 = -0.25 at a = 2
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let out = pow_op(&mut tape, a, -1.0).unwrap();

    tape.backward(out);
    assert_eq!(tape.value(out), 0.5);
    assert_eq!(tape.grad(a), -0.25);
}

#[test]
fn test_pow_rejects_non_finite_exponent_before_recording() {
    let mut tape = Tape::new();
    let a = tape.leaf(2.0);
    let len_before = tape.len();

    let err = pow_op(&mut tape, a, f64::NAN).unwrap_err();
    assert!(matches!(err, ScalarGradError::InvalidExponent { .. }));
    assert_eq!(tape.len(), len_before, "failed pow must not record a node");

    let err = pow_op(&mut tape, a, f64::INFINITY).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::InvalidExponent {
            exponent: f64::INFINITY
        }
    );
    assert_eq!(tape.len(), len_before);
}
