//! ISAAC seeding.
//!
//! Turns up to 256 seed words into an initial [`IsaacState`] and a first
//! block of output:
//! 1. Eight registers start at the golden ratio and are mixed four times.
//! 2. The seed words are copied into the results buffer, zero-padded.
//! 3. First pass: each 8-word chunk of the results buffer is added into
//!    the registers, mixed, and stored into the same chunk of `mm`.
//! 4. Second pass: the same over `mm` itself, so every word of `mm`
//!    depends on the whole seed.
//! 5. One block is generated.
//!
//! An empty seed is valid and equivalent to 256 zero words. That fixed
//! baseline is not unpredictable; picking seed material is the caller's
//! job.

use zeroize::Zeroize;

use super::state::{IsaacState, Registers, Results, RAND_SIZE};
use crate::backend::Backend;

/// Rounds of mixing applied to the golden ratio registers before any
/// seed material is absorbed.
const WARMUP_ROUNDS: usize = 4;

/// Seeds a fresh state and returns it with its first block of output.
///
/// Words past [`RAND_SIZE`] are ignored; callers validate the length
/// before reaching here.
pub(crate) fn initialize(seed: &[u32], backend: Backend) -> (IsaacState, Results) {
    debug_assert!(seed.len() <= RAND_SIZE);

    let mut st = IsaacState::zeroed();
    let mut rsl: Results = [0u32; RAND_SIZE];
    for (slot, &word) in rsl.iter_mut().zip(seed) {
        *slot = word;
    }

    let mut regs = Registers::golden();
    for _ in 0..WARMUP_ROUNDS {
        regs.mix();
    }

    for (chunk, src) in st.mm.chunks_exact_mut(8).zip(rsl.chunks_exact(8)) {
        regs.absorb(src);
        regs.mix();
        regs.store(chunk);
    }

    for chunk in st.mm.chunks_exact_mut(8) {
        regs.absorb(chunk);
        regs.mix();
        regs.store(chunk);
    }
    regs.zeroize();

    // overwrites the seed copy in rsl
    backend.generate(&mut st, &mut rsl);
    (st, rsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let seed = [1u32, 23, 456, 7890, 12345];
        let (st1, rsl1) = initialize(&seed, Backend::Reference);
        let (st2, rsl2) = initialize(&seed, Backend::Reference);
        assert_eq!(st1.mm, st2.mm);
        assert_eq!(rsl1, rsl2);
        assert_eq!((st1.aa, st1.bb, st1.cc), (st2.aa, st2.bb, st2.cc));
    }

    #[test]
    fn test_empty_seed_equals_zero_seed() {
        let (st_empty, rsl_empty) = initialize(&[], Backend::Reference);
        let (st_zero, rsl_zero) = initialize(&[0u32; RAND_SIZE], Backend::Reference);
        assert_eq!(st_empty.mm, st_zero.mm);
        assert_eq!(rsl_empty, rsl_zero);
    }

    #[test]
    fn test_short_seed_is_zero_padded() {
        let mut padded = [0u32; RAND_SIZE];
        padded[0] = 7;
        padded[1] = 11;
        let (_, rsl_short) = initialize(&[7, 11], Backend::Reference);
        let (_, rsl_padded) = initialize(&padded, Backend::Reference);
        assert_eq!(rsl_short, rsl_padded);
    }

    #[test]
    fn test_one_block_generated() {
        let (st, _) = initialize(&[42], Backend::Unrolled);
        assert_eq!(st.cc, 1);
    }

    #[test]
    fn test_backends_seed_identically() {
        let seed: Vec<u32> = (0..RAND_SIZE as u32).map(|i| i.wrapping_mul(2654435761)).collect();
        let (st_ref, rsl_ref) = initialize(&seed, Backend::Reference);
        let (st_unr, rsl_unr) = initialize(&seed, Backend::Unrolled);
        assert_eq!(st_ref.mm, st_unr.mm);
        assert_eq!(rsl_ref, rsl_unr);
    }

    #[test]
    fn test_last_seed_word_matters() {
        let mut a = [0u32; RAND_SIZE];
        let mut b = [0u32; RAND_SIZE];
        a[RAND_SIZE - 1] = 1;
        b[RAND_SIZE - 1] = 2;
        let (_, rsl_a) = initialize(&a, Backend::Reference);
        let (_, rsl_b) = initialize(&b, Backend::Reference);
        assert_ne!(rsl_a[0], rsl_b[0]);
    }
}
