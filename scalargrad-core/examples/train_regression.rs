//! Trains a small MLP on a four-sample regression task.
//!
//! Demonstrates the whole cycle on one `Tape`:
//! 1. build the model (parameters land at the front of the tape);
//! 2. take a mark, and rewind to it at the top of every iteration so the
//!    previous iteration's intermediate nodes are discarded in bulk;
//! 3. forward over all samples, reduce with `MSELoss`, `backward`;
//! 4. manual gradient-descent update of every parameter.
//!
//! Run with: `cargo run --example train_regression`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{MSELoss, Module, Reduction, MLP};
use scalargrad_core::{ScalarGradError, Tape};

fn main() -> Result<(), ScalarGradError> {
    let xs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut tape = Tape::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = MLP::new(&mut tape, &mut rng, 3, &[4, 4, 1])?;
    println!("parameters: {}", mlp.parameters().len());

    let loss_fn = MSELoss::new(Reduction::Sum);
    let learning_rate = 0.01;
    let iterations = 500;

    let mark = tape.mark();
    for iteration in 0..iterations {
        tape.rewind(mark);
        mlp.zero_grad(&mut tape);

        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let input: Vec<_> = x.iter().map(|&v| tape.leaf(v)).collect();
            let out = mlp.forward(&mut tape, &input)?;
            predictions.push(out[0]);
        }

        let loss = loss_fn.calculate(&mut tape, &predictions, &ys)?;
        tape.backward(loss);

        for param in mlp.parameters() {
            let updated = param.value(&tape) - learning_rate * param.grad(&tape);
            param.set_value(&mut tape, updated);
        }

        if iteration % 50 == 0 {
            println!("iteration {:>3}  loss {:.6}", iteration, tape.value(loss));
        }
    }

    // Show the fitted predictions next to the targets.
    tape.rewind(mark);
    for (x, y) in xs.iter().zip(&ys) {
        let input: Vec<_> = x.iter().map(|&v| tape.leaf(v)).collect();
        let out = mlp.forward(&mut tape, &input)?;
        println!("target {:>5.1}  predicted {:>8.4}", y, tape.value(out[0]));
    }

    Ok(())
}
