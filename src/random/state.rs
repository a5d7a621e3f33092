//! ISAAC working state and the eight-register mixing round.
//!
//! The state is the 256-word memory array `mm` plus the three
//! accumulators `aa`, `bb` and `cc`. All arithmetic wraps modulo 2^32.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// log2 of the memory and results array size.
pub(crate) const RAND_SIZE_LEN: u32 = 8;

/// Number of words in the memory array and in each output block.
pub const RAND_SIZE: usize = 1 << RAND_SIZE_LEN;

/// Golden ratio constant every seeding register starts from.
pub(crate) const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Mask that keeps an index inside `0..RAND_SIZE`.
const INDEX_MASK: u32 = (RAND_SIZE as u32) - 1;

/// One block of 256 output words.
pub(crate) type Results = [u32; RAND_SIZE];

/// Internal ISAAC state: memory array and accumulators.
///
/// Owned exclusively by one [`IsaacRng`](crate::IsaacRng) and mutated
/// in place by seeding and by every block generation.
pub(crate) struct IsaacState {
    pub(crate) mm: [u32; RAND_SIZE],
    pub(crate) aa: u32,
    pub(crate) bb: u32,
    pub(crate) cc: u32,
}

impl IsaacState {
    /// Returns an all-zero state, the starting point of seeding.
    pub(crate) fn zeroed() -> Self {
        IsaacState {
            mm: [0u32; RAND_SIZE],
            aa: 0,
            bb: 0,
            cc: 0,
        }
    }

    /// Table lookup used by the generator's double indirection.
    ///
    /// Selects bits 2..10 of `v` as the index, so the result is always
    /// in bounds regardless of `v`.
    #[inline(always)]
    pub(crate) fn ind(&self, v: u32) -> u32 {
        self.mm[((v >> 2) & INDEX_MASK) as usize]
    }
}

impl Zeroize for IsaacState {
    /// Overwrites all words and accumulators with zero.
    fn zeroize(&mut self) {
        self.mm.zeroize();
        self.aa.zeroize();
        self.bb.zeroize();
        self.cc.zeroize();
    }
}

impl Drop for IsaacState {
    /// Clears the memory array and accumulators on drop.
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for IsaacState {}

/// Eight working registers used during seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Registers(pub(crate) [u32; 8]);

impl Registers {
    /// All eight registers set to the golden ratio.
    pub(crate) fn golden() -> Self {
        Registers([GOLDEN_RATIO; 8])
    }

    /// Adds eight words into the registers, one word per register.
    #[inline]
    pub(crate) fn absorb(&mut self, words: &[u32]) {
        for (reg, &w) in self.0.iter_mut().zip(words) {
            *reg = reg.wrapping_add(w);
        }
    }

    /// Runs one mixing round over the eight registers.
    ///
    /// Fixed shift amounts 11, 2, 8, 16, 10, 4, 8, 9 alternating left and
    /// right, each followed by two additions into the neighbouring
    /// registers.
    #[inline]
    pub(crate) fn mix(&mut self) {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

        a ^= b << 11;
        d = d.wrapping_add(a);
        b = b.wrapping_add(c);

        b ^= c >> 2;
        e = e.wrapping_add(b);
        c = c.wrapping_add(d);

        c ^= d << 8;
        f = f.wrapping_add(c);
        d = d.wrapping_add(e);

        d ^= e >> 16;
        g = g.wrapping_add(d);
        e = e.wrapping_add(f);

        e ^= f << 10;
        h = h.wrapping_add(e);
        f = f.wrapping_add(g);

        f ^= g >> 4;
        a = a.wrapping_add(f);
        g = g.wrapping_add(h);

        g ^= h << 8;
        b = b.wrapping_add(g);
        h = h.wrapping_add(a);

        h ^= a >> 9;
        c = c.wrapping_add(h);
        a = a.wrapping_add(b);

        self.0 = [a, b, c, d, e, f, g, h];
    }

    /// Writes the registers into an eight-word slot.
    #[inline]
    pub(crate) fn store(&self, slot: &mut [u32]) {
        slot.copy_from_slice(&self.0);
    }
}

impl Zeroize for Registers {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
