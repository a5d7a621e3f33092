//! ISAAC cryptographically secure pseudorandom number generator.
//!
//! ISAAC (Indirection, Shift, Accumulate, Add, Count) turns up to 256
//! words of seed material into an unbounded stream of uniformly
//! distributed 32-bit words, 256 words per internal block.
//!
//! # Architecture
//!
//! ```text
//! seed words ──► seeding   (golden-ratio registers, two diffusion passes)
//!                   │
//!                   ▼
//!              IsaacState  (mm[256], aa, bb, cc)
//!                   │
//!                   ▼
//!              generator   (one block of 256 words per call,
//!                   │       unrolled or reference backend)
//!                   ▼
//!              IsaacRng    (serves words one at a time, refills on exhaustion)
//! ```
//!
//! The library does not gather entropy. An empty seed is valid and always
//! yields the same stream; choosing unpredictable seed material is the
//! caller's responsibility.
//!
//! # Examples
//!
//! Draw words and unit-interval values:
//!
//! ```
//! use isaac_csprng::IsaacRng;
//!
//! let mut rng = IsaacRng::new(&[0xDEAD_BEEF, 0x0BAD_F00D]).unwrap();
//! let word: u32 = rng.next_word();
//! let unit: f64 = rng.next_unit_interval();
//! assert!((0.0..=1.0).contains(&unit));
//! # let _ = word;
//! ```
//!
//! Seed from bytes or 64-bit values by converting to words first:
//!
//! ```
//! use isaac_csprng::utils::converter;
//! use isaac_csprng::IsaacRng;
//!
//! let words = converter::u64_to_words(&[0x0123_4567_89AB_CDEF]);
//! let mut rng = IsaacRng::new(&words).unwrap();
//! rng.next_word();
//! ```
//!
//! `IsaacRng` also implements `rand_core::RngCore`, so the `rand`
//! adaptors work on it directly.

#![deny(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod random;
pub mod utils;

pub use backend::{active_backend, Backend};
pub use config::{BackendPreference, GeneratorConfig};
pub use error::IsaacError;
pub use random::isaac::IsaacRng;
pub use random::state::RAND_SIZE;
