use crate::nn::Parameter;
use crate::tape::Tape;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Records a parameter drawn from `U(low, high)`.
///
/// The stock network initializes weights from `U(-1, 1)`; passing a seeded
/// `StdRng` makes the whole model construction reproducible.
pub fn uniform<R: Rng + ?Sized>(tape: &mut Tape, rng: &mut R, low: f64, high: f64) -> Parameter {
    let dist = Uniform::new(low, high);
    Parameter::new(tape, dist.sample(rng))
}

/// Records a zero-valued parameter (the bias scheme of the stock network).
pub fn zero(tape: &mut Tape) -> Parameter {
    Parameter::new(tape, 0.0)
}
