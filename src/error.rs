//! Error types for the ISAAC generator crate.

use thiserror::Error;

/// Errors produced by the ISAAC generator crate.
///
/// The draw operations never fail; these errors only arise while
/// preparing seed material or resolving configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsaacError {
    /// Seed holds more words than the 256-word results buffer can take.
    #[error("Seed has {len} words, at most {max} are accepted")]
    SeedTooLong {
        /// Number of words supplied by the caller
        len: usize,
        /// Maximum number of seed words
        max: usize,
    },

    /// Byte array length is not a multiple of 4.
    #[error("Byte array length {len} is not a multiple of 4")]
    InvalidByteArrayLength {
        /// Length of the rejected byte array
        len: usize,
    },

    /// Backend name is not one of `auto`, `unrolled` or `reference`.
    #[error("Unknown backend '{0}', expected one of: auto, unrolled, reference")]
    UnknownBackend(String),
}
