//! Error types for wire format operations.

use cursor::CursorError;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while encoding or decoding wire structures.
///
/// Every variant is a bounds or length error of some kind. Errors are
/// returned to the immediate caller; a failed decode never produces a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum WireError {
    /// The underlying cursor ran out of bytes or capacity.
    #[error(transparent)]
    Cursor(#[from] CursorError),

    /// An explicit decode length is smaller than the fixed header.
    #[error("decode length {length} is smaller than the {required}-byte header")]
    LengthTooShort { length: usize, required: usize },

    /// An explicit decode length disagrees with the length the data declares.
    #[error("decode length {given} differs from declared packet length {declared}")]
    LengthMismatch { given: usize, declared: usize },

    /// A declared payload exceeds the configured limit.
    #[error("payload of {actual} bytes exceeds limit of {limit}")]
    PayloadTooLarge { actual: usize, limit: usize },

    /// A packet payload was requested but the packet carries none.
    #[error("packet has no payload")]
    MissingPayload,

    /// A byte count cannot be expressed in 16-bit words.
    #[error("length of {length} bytes is not a whole number of 16-bit words")]
    OddLength { length: usize },

    /// A length does not fit the width of its wire field.
    #[error("length {length} exceeds field maximum {max}")]
    LengthOverflow { length: usize, max: usize },
}
