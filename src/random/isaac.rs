//! The ISAAC generator instance.
//!
//! [`IsaacRng`] owns one ISAAC state and its current block of output, and
//! serves words one at a time from that block, generating the next block
//! when all 256 words have been consumed.
//!
//! # Concurrency
//!
//! Draws take `&mut self`: the cursor and the block refresh must not
//! interleave, and the borrow checker enforces that for a single owner.
//! To share one instance between threads, wrap it in a lock
//! (`Mutex<IsaacRng>`) so each draw is serialised.

use std::fmt;

use rand_core::{impls, le, CryptoRng, RngCore, SeedableRng};
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::seeding;
use super::state::{IsaacState, Results, RAND_SIZE};
use crate::backend::{active_backend, Backend};
use crate::config::GeneratorConfig;
use crate::error::IsaacError;

/// Divisor mapping a word onto the closed interval [0, 1].
const UNIT_DIVISOR: f64 = u32::MAX as f64;

/// ISAAC cryptographically secure pseudorandom number generator.
///
/// Seeded with up to 256 words of caller-supplied material; identical
/// seeds always yield identical streams. There is no automatic seeding,
/// reseeding or cloning: build a new instance to change the seed.
///
/// # Examples
///
/// ```
/// use isaac_csprng::IsaacRng;
///
/// let mut rng = IsaacRng::new(&[1, 23, 456, 7890, 12345]).unwrap();
/// let word = rng.next_word();
/// let unit = rng.next_unit_interval();
/// assert!((0.0..=1.0).contains(&unit));
///
/// let mut again = IsaacRng::new(&[1, 23, 456, 7890, 12345]).unwrap();
/// assert_eq!(again.next_word(), word);
/// ```
pub struct IsaacRng {
    state: IsaacState,
    results: Results,
    cursor: usize,
    backend: Backend,
}

impl IsaacRng {
    /// Maximum number of seed words accepted.
    pub const MAX_SEED_WORDS: usize = RAND_SIZE;

    /// Creates a generator using the process-wide [`active_backend`].
    ///
    /// # Parameters
    /// - `seed`: Seed words, possibly empty. Wider values must be split
    ///   into `u32` words by the caller (see
    ///   [`converter`](crate::utils::converter)).
    ///
    /// # Errors
    /// Returns [`IsaacError::SeedTooLong`] if `seed` has more than
    /// [`MAX_SEED_WORDS`](Self::MAX_SEED_WORDS) words.
    pub fn new(seed: &[u32]) -> Result<Self, IsaacError> {
        Self::with_backend(seed, active_backend())
    }

    /// Creates a generator with an explicit backend.
    ///
    /// # Errors
    /// Returns [`IsaacError::SeedTooLong`] if `seed` has more than
    /// [`MAX_SEED_WORDS`](Self::MAX_SEED_WORDS) words.
    pub fn with_backend(seed: &[u32], backend: Backend) -> Result<Self, IsaacError> {
        if seed.len() > Self::MAX_SEED_WORDS {
            return Err(IsaacError::SeedTooLong {
                len: seed.len(),
                max: Self::MAX_SEED_WORDS,
            });
        }
        Ok(Self::seeded(seed, backend))
    }

    /// Creates a generator with the backend resolved from `config`.
    ///
    /// # Errors
    /// Returns [`IsaacError::SeedTooLong`] if `seed` has more than
    /// [`MAX_SEED_WORDS`](Self::MAX_SEED_WORDS) words.
    pub fn with_config(seed: &[u32], config: &GeneratorConfig) -> Result<Self, IsaacError> {
        Self::with_backend(seed, config.backend.resolve())
    }

    fn seeded(seed: &[u32], backend: Backend) -> Self {
        let (state, results) = seeding::initialize(seed, backend);
        debug!(seed_words = seed.len(), backend = %backend, "isaac generator seeded");
        IsaacRng {
            state,
            results,
            cursor: 0,
            backend,
        }
    }

    /// Returns the next 32-bit output word.
    ///
    /// Generates a fresh block once every 256 calls.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        if self.cursor >= RAND_SIZE {
            self.refill();
        }
        let word = self.results[self.cursor];
        self.cursor += 1;
        word
    }

    /// Returns the next word scaled into [0.0, 1.0], both ends inclusive.
    #[inline]
    pub fn next_unit_interval(&mut self) -> f64 {
        f64::from(self.next_word()) / UNIT_DIVISOR
    }

    /// Backend this instance generates blocks with.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Number of blocks generated so far, including the one produced
    /// during seeding. Wraps after 2^32 blocks.
    pub fn generation(&self) -> u32 {
        self.state.cc
    }

    /// Words left in the current block before the next refresh.
    pub fn remaining(&self) -> usize {
        RAND_SIZE - self.cursor
    }

    fn refill(&mut self) {
        self.backend.generate(&mut self.state, &mut self.results);
        self.cursor = 0;
        trace!(generation = self.state.cc, "isaac block generated");
    }
}

impl fmt::Debug for IsaacRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsaacRng")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl Drop for IsaacRng {
    /// Clears the output block and cursor on drop.
    ///
    /// The memory array and accumulators are cleared by `IsaacState`'s own
    /// drop.
    fn drop(&mut self) {
        self.results.zeroize();
        self.cursor.zeroize();
    }
}

impl ZeroizeOnDrop for IsaacRng {}

impl RngCore for IsaacRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    /// Two words, the first drawn becoming the low half.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for IsaacRng {}

impl SeedableRng for IsaacRng {
    /// Eight seed words, little-endian.
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let seed = Zeroizing::new(seed);
        let mut words = Zeroizing::new([0u32; 8]);
        le::read_u32_into(&seed[..], &mut words[..]);
        Self::seeded(&words[..], active_backend())
    }
}
