//! Byte-level reader with bounded operations.

use crate::error::{CursorError, CursorResult};

/// A sequential reader over a borrowed byte slice.
///
/// All read operations are bounds-checked and return errors on failure.
/// A failed read leaves the position where it was. Multi-byte integers are
/// little-endian, the byte order used throughout EtherNet/IP.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> CursorResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> CursorResult<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> CursorResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self) -> CursorResult<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads an `i8`.
    pub fn read_i8(&mut self) -> CursorResult<i8> {
        self.read_array().map(i8::from_le_bytes)
    }

    /// Reads a little-endian `i16`.
    pub fn read_i16(&mut self) -> CursorResult<i16> {
        self.read_array().map(i16::from_le_bytes)
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> CursorResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> CursorResult<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads `len` bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> CursorResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    /// Fills `out` with the next `out.len()` bytes.
    pub fn read_into(&mut self, out: &mut [u8]) -> CursorResult<()> {
        let bytes = self.read_bytes(out.len())?;
        out.copy_from_slice(bytes);
        Ok(())
    }

    /// Advances past `len` bytes without copying them.
    ///
    /// Used for reserved and pad bytes.
    pub fn skip(&mut self, len: usize) -> CursorResult<()> {
        self.ensure_bytes(len)?;
        self.pos += len;
        Ok(())
    }

    fn ensure_bytes(&self, len: usize) -> CursorResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(CursorError::UnexpectedEof {
                requested: len,
                available,
            });
        }
        Ok(())
    }
}
