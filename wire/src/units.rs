//! Conversions between byte counts and 16-bit word counts.
//!
//! CIP length fields for paths and connection response data count 16-bit
//! words, while buffers in memory are measured in bytes. Every conversion in
//! the workspace goes through these two functions.

use crate::error::{WireError, WireResult};

/// Size of a CIP word in bytes.
pub const WORD_SIZE: usize = 2;

/// Largest byte count a one-byte word-count field can describe.
pub const MAX_WORD_FIELD_BYTES: usize = u8::MAX as usize * WORD_SIZE;

/// Converts a byte count to the one-byte word count written on the wire.
///
/// Fails with [`WireError::OddLength`] if `bytes` is odd and with
/// [`WireError::LengthOverflow`] if the word count exceeds 255.
pub fn bytes_to_words(bytes: usize) -> WireResult<u8> {
    if bytes % WORD_SIZE != 0 {
        return Err(WireError::OddLength { length: bytes });
    }
    u8::try_from(bytes / WORD_SIZE).map_err(|_| WireError::LengthOverflow {
        length: bytes,
        max: MAX_WORD_FIELD_BYTES,
    })
}

/// Converts a word count read from the wire to the byte count it covers.
#[must_use]
pub const fn words_to_bytes(words: u8) -> usize {
    words as usize * WORD_SIZE
}
