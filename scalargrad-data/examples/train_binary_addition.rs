//! Trains an MLP to add two 4-bit numbers.
//!
//! Each sample's input is the 8 bits of the two operands; the target is the
//! 4-bit (wrapping) sum. The learning rate decays linearly across
//! iterations via `Sgd::set_lr`.
//!
//! Run with: `cargo run --example train_binary_addition`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{MSELoss, Module, Reduction, MLP};
use scalargrad_core::{ScalarGradError, Tape};
use scalargrad_data::synthetic::binary_addition;
use scalargrad_data::{sample_to_leaves, Dataset};
use scalargrad_optim::{Optimizer, Sgd};

const NUM_BITS: usize = 4;

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(1234);
    let dataset = binary_addition(&mut rng, 7, NUM_BITS);

    let mut tape = Tape::new();
    let mlp = MLP::new(&mut tape, &mut rng, NUM_BITS * 2, &[12, 10, NUM_BITS])?;
    let params = mlp.parameters();
    println!("num parameters: {}", params.len());

    let loss_fn = MSELoss::new(Reduction::Sum);
    let mut optim = Sgd::new(0.01);
    let iterations = 100;

    let mark = tape.mark();
    for iteration in 0..iterations {
        tape.rewind(mark);
        optim.zero_grad(&mut tape, &params);

        // every output bit of every sample contributes to one loss node
        let mut predictions = Vec::with_capacity(dataset.len() * NUM_BITS);
        let mut targets = Vec::with_capacity(dataset.len() * NUM_BITS);
        for i in 0..dataset.len() {
            let (features, target_bits) = dataset.get(i);
            let input = sample_to_leaves(&mut tape, &features);
            predictions.extend(mlp.forward(&mut tape, &input)?);
            targets.extend(target_bits);
        }

        let loss = loss_fn.calculate(&mut tape, &predictions, &targets)?;
        tape.backward(loss);

        // linearly decaying schedule
        optim.set_lr(0.01 - 0.009 * iteration as f64 / iterations as f64);
        optim.step(&mut tape, &params);

        println!("iteration {:>3}  loss {:.6}", iteration, tape.value(loss));
    }

    // Inspect the model on two fixed probes.
    let probes: [[f64; 8]; 2] = [
        [1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0], // 9 + 6
        [0.0; 8],                                  // 0 + 0
    ];
    tape.rewind(mark);
    for probe in &probes {
        let input = sample_to_leaves(&mut tape, probe);
        let out = mlp.forward(&mut tape, &input)?;
        let bits: Vec<f64> = out.iter().map(|&id| tape.value(id)).collect();
        println!("input {:?} -> predicted bits {:?}", probe, bits);
    }

    Ok(())
}
