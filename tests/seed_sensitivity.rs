//! Statistical seed sensitivity.
//!
//! Seeds differing in a single bit must yield streams that look
//! unrelated from the first block on: about half of the output bits
//! differ, and no bit position stays correlated.

use isaac_csprng::{IsaacRng, RAND_SIZE};

const BASE_SEED: [u32; 8] = [
    0x243f_6a88, 0x85a3_08d3, 0x1319_8a2e, 0x0370_7344, 0xa409_3822, 0x299f_31d0, 0x082e_fa98,
    0xec4e_6c89,
];

/// Draws `n` words from a fresh generator.
fn draw(seed: &[u32], n: usize) -> Vec<u32> {
    let mut rng = IsaacRng::new(seed).unwrap();
    (0..n).map(|_| rng.next_word()).collect()
}

/// Returns a copy of `seed` with one bit flipped.
fn flip(seed: &[u32], word: usize, bit: u32) -> Vec<u32> {
    let mut out = seed.to_vec();
    out[word] ^= 1 << bit;
    out
}

/// Fraction of bits that differ between two equally long streams.
fn differing_bit_fraction(a: &[u32], b: &[u32]) -> f64 {
    let differing: u32 = a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum();
    differing as f64 / (a.len() * 32) as f64
}

#[test]
fn single_bit_flip_diverges_in_first_block() {
    let base = draw(&BASE_SEED, RAND_SIZE);
    for (word, bit) in [(0, 0), (0, 31), (3, 17), (7, 5)] {
        let flipped = draw(&flip(&BASE_SEED, word, bit), RAND_SIZE);
        assert_ne!(base[0], flipped[0], "first word equal for flip ({}, {})", word, bit);

        let frac = differing_bit_fraction(&base, &flipped);
        assert!(
            (0.45..0.55).contains(&frac),
            "flip ({}, {}): {} of first-block bits differ",
            word,
            bit,
            frac
        );
    }
}

#[test]
fn flip_in_last_seed_slot_diverges() {
    let mut full = [0u32; RAND_SIZE];
    full[..BASE_SEED.len()].copy_from_slice(&BASE_SEED);
    let base = draw(&full, RAND_SIZE);
    let flipped = draw(&flip(&full, RAND_SIZE - 1, 0), RAND_SIZE);
    let frac = differing_bit_fraction(&base, &flipped);
    assert!((0.45..0.55).contains(&frac), "{} of bits differ", frac);
}

#[test]
fn per_bit_position_correlation_near_zero() {
    let n = 32 * RAND_SIZE;
    let base = draw(&BASE_SEED, n);
    let flipped = draw(&flip(&BASE_SEED, 0, 0), n);

    for bit in 0..32 {
        let agree = base
            .iter()
            .zip(&flipped)
            .filter(|(x, y)| ((*x ^ *y) >> bit) & 1 == 0)
            .count();
        // +1 when always equal, -1 when always opposite
        let correlation = 2.0 * agree as f64 / n as f64 - 1.0;
        assert!(
            correlation.abs() < 0.1,
            "bit {} correlation {} too strong",
            bit,
            correlation
        );
    }
}

#[test]
fn output_bits_are_balanced() {
    let words = draw(&BASE_SEED, 64 * RAND_SIZE);
    let ones: u32 = words.iter().map(|w| w.count_ones()).sum();
    let frac = ones as f64 / (words.len() * 32) as f64;
    assert!((frac - 0.5).abs() < 0.01, "ones fraction {}", frac);
}
