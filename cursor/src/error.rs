//! Error types for cursor operations.

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while reading from or writing to a byte buffer.
///
/// Both variants are bounds errors: the requested access would run past the
/// end of the underlying buffer. The cursor position is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// Attempted to read or skip past the end of the buffer.
    #[error("attempted to read {requested} bytes but only {available} bytes available")]
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes remaining in the buffer.
        available: usize,
    },

    /// Attempted to write more bytes than the buffer can hold.
    #[error("attempted to write {requested} bytes but only {available} bytes of capacity remain")]
    BufferOverflow {
        /// Number of bytes the write needed.
        requested: usize,
        /// Number of bytes of capacity remaining.
        available: usize,
    },
}
