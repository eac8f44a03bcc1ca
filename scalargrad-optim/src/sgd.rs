// scalargrad-optim/src/sgd.rs

use crate::Optimizer;
use scalargrad_core::nn::Parameter;
use scalargrad_core::Tape;

/// Implements stochastic gradient descent (optionally with momentum).
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
///
/// With a non-zero momentum `m`, the update direction is the running
/// velocity `v = m * v + grad(p)` instead of the raw gradient.
#[derive(Debug)]
pub struct Sgd {
    lr: f64,
    momentum: f64,
    velocities: Vec<f64>,
}

impl Sgd {
    /// Creates a new SGD optimizer instance.
    ///
    /// # Arguments
    ///
    /// * `lr` - The learning rate.
    pub fn new(lr: f64) -> Self {
        Sgd::with_momentum(lr, 0.0)
    }

    pub fn with_momentum(lr: f64, momentum: f64) -> Self {
        if lr <= 0.0 {
            log::warn!("SGD created with non-positive learning rate {}", lr);
        }
        Sgd {
            lr,
            momentum,
            velocities: Vec::new(),
        }
    }

    /// Replaces the learning rate. Lets a driver apply an
    /// iteration-dependent schedule between steps.
    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }
}

impl Optimizer for Sgd {
    /// Performs a single optimization step (parameter update).
    ///
    /// Momentum buffers are keyed by position in `params`; pass the same
    /// parameter list in the same order on every step.
    fn step(&mut self, tape: &mut Tape, params: &[Parameter]) {
        if self.velocities.len() != params.len() {
            self.velocities = vec![0.0; params.len()];
        }

        for (param, velocity) in params.iter().zip(self.velocities.iter_mut()) {
            let grad = param.grad(tape);
            let direction = if self.momentum == 0.0 {
                grad
            } else {
                *velocity = self.momentum * *velocity + grad;
                *velocity
            };
            param.set_value(tape, param.value(tape) - self.lr * direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalargrad_core::Tape;

    // Helper to give a parameter a known gradient through a real pass
    fn param_with_grad(tape: &mut Tape, value: f64, slope: f64) -> Parameter {
        let param = Parameter::new(tape, value);
        let out = tape.mul(param.id(), slope);
        tape.backward(out);
        param
    }

    #[test]
    fn test_sgd_step() {
        let mut tape = Tape::new();
        let p1 = param_with_grad(&mut tape, 1.0, 10.0);
        let p2 = param_with_grad(&mut tape, 3.0, -20.0);

        let mut optim = Sgd::new(0.1);
        optim.step(&mut tape, &[p1, p2]);

        // p = p - lr * grad
        assert!((p1.value(&tape) - 0.0).abs() < 1e-12);
        assert!((p2.value(&tape) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sgd_zero_grad() {
        let mut tape = Tape::new();
        let p1 = param_with_grad(&mut tape, 1.0, 2.0);
        let p2 = Parameter::new(&mut tape, 4.0);

        assert!(p1.grad(&tape) != 0.0);
        assert_eq!(p2.grad(&tape), 0.0);

        let optim = Sgd::new(0.1);
        optim.zero_grad(&mut tape, &[p1, p2]);

        assert_eq!(p1.grad(&tape), 0.0);
        assert_eq!(p2.grad(&tape), 0.0);
    }

    #[test]
    fn test_sgd_set_lr_changes_update_size() {
        let mut tape = Tape::new();
        let p = param_with_grad(&mut tape, 0.0, 1.0); // grad = 1

        let mut optim = Sgd::new(0.5);
        optim.step(&mut tape, &[p]);
        assert!((p.value(&tape) + 0.5).abs() < 1e-12);

        optim.set_lr(0.1);
        assert_eq!(optim.lr(), 0.1);
        optim.step(&mut tape, &[p]);
        assert!((p.value(&tape) + 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_sgd_momentum_accumulates_velocity() {
        let mut tape = Tape::new();
        let p = param_with_grad(&mut tape, 0.0, 1.0); // constant grad 1

        let mut optim = Sgd::with_momentum(1.0, 0.5);
        optim.step(&mut tape, &[p]); // v = 1,   p = -1
        assert!((p.value(&tape) + 1.0).abs() < 1e-12);

        // gradient still 1 on the parameter node (not re-zeroed, but the
        // graph is not re-run either, so grad stays as accumulated)
        optim.step(&mut tape, &[p]); // v = 1.5, p = -2.5
        assert!((p.value(&tape) + 2.5).abs() < 1e-12);
    }
}
