//! Synthetic task generation for the demo drivers.

use crate::VecDataset;
use rand::Rng;

/// Converts a most-significant-first bit list to its integer value.
pub fn bits_to_int(bits: &[u8]) -> u32 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
}

/// Converts an integer to a most-significant-first bit list of width
/// `bits`. Bits above the width are dropped, so a carry out of the top
/// position wraps.
pub fn int_to_bits(mut value: u32, bits: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(bits);
    for _ in 0..bits {
        out.push((value & 1) as u8);
        value >>= 1;
    }
    out.reverse();
    out
}

/// Generates the binary-addition task: each input holds two `bits`-wide
/// numbers (2 * `bits` features of 0.0/1.0), each target the `bits`-wide
/// sum.
pub fn binary_addition<R: Rng + ?Sized>(
    rng: &mut R,
    samples: usize,
    bits: usize,
) -> VecDataset<Vec<f64>, Vec<f64>> {
    let mut inputs = Vec::with_capacity(samples);
    let mut targets = Vec::with_capacity(samples);

    for _ in 0..samples {
        let input_bits: Vec<u8> = (0..bits * 2).map(|_| rng.gen_range(0..=1u8)).collect();
        let lhs = bits_to_int(&input_bits[..bits]);
        let rhs = bits_to_int(&input_bits[bits..]);
        let sum_bits = int_to_bits(lhs + rhs, bits);

        inputs.push(input_bits.iter().map(|&b| f64::from(b)).collect());
        targets.push(sum_bits.iter().map(|&b| f64::from(b)).collect());
    }

    VecDataset::new(inputs, targets)
}
