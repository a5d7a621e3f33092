//! Seed material conversion.
//!
//! The generator only accepts `u32` words. These helpers turn wider or
//! byte-oriented seed material into words with a fixed, documented
//! layout, so callers never depend on a guess made inside the core.

use crate::error::IsaacError;

/// Converts a byte slice to `u32` words using little-endian byte ordering.
///
/// Each group of 4 bytes becomes one word, the first byte in the least
/// significant position.
///
/// # Parameters
/// - `input`: Byte slice whose length must be a multiple of 4.
///
/// # Returns
/// A `Vec<u32>` containing `input.len() / 4` elements.
///
/// # Errors
/// Returns [`IsaacError::InvalidByteArrayLength`] if `input.len() % 4 != 0`.
pub fn bytes_to_words(input: &[u8]) -> Result<Vec<u32>, IsaacError> {
    if input.len() % 4 != 0 {
        return Err(IsaacError::InvalidByteArrayLength { len: input.len() });
    }
    Ok(input
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Converts `u32` words to bytes using little-endian byte ordering.
///
/// Inverse of [`bytes_to_words`].
pub fn words_to_bytes(input: &[u32]) -> Vec<u8> {
    input.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Splits each `u64` into two `u32` words, low word first.
///
/// # Returns
/// A `Vec<u32>` containing `2 * input.len()` elements.
pub fn u64_to_words(input: &[u64]) -> Vec<u32> {
    let mut output = Vec::with_capacity(input.len() * 2);
    for &value in input {
        output.push(value as u32);
        output.push((value >> 32) as u32);
    }
    output
}
