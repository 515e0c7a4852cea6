//! Byte-level writer over a caller-provided buffer.

use crate::error::{CursorError, CursorResult};

/// A sequential writer into a fixed-size, caller-owned buffer.
///
/// Writes never grow the buffer. A write that does not fit fails with
/// [`CursorError::BufferOverflow`] and writes nothing. Call
/// [`finish`](Self::finish) to get the number of bytes used.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    /// Creates a new `ByteWriter` positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the total capacity of the underlying buffer in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes that can still be written.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Writes a `u8`.
    pub fn write_u8(&mut self, value: u8) -> CursorResult<()> {
        self.write_bytes(&[value])
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> CursorResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> CursorResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64(&mut self, value: u64) -> CursorResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes an `i8`.
    pub fn write_i8(&mut self, value: i8) -> CursorResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `i16`.
    pub fn write_i16(&mut self, value: i16) -> CursorResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) -> CursorResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a raw byte range.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> CursorResult<()> {
        self.ensure_capacity(bytes.len())?;
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Writes `len` zero bytes (reserved or pad fields).
    pub fn write_zeros(&mut self, len: usize) -> CursorResult<()> {
        self.ensure_capacity(len)?;
        let end = self.pos + len;
        self.buf[self.pos..end].fill(0);
        self.pos = end;
        Ok(())
    }

    /// Finishes writing and returns the number of bytes used.
    #[must_use]
    pub const fn finish(self) -> usize {
        self.pos
    }

    /// Checks that `len` more bytes fit without writing anything.
    ///
    /// Lets a multi-field encoder fail up front instead of leaving a
    /// partially written message behind.
    pub fn ensure_capacity(&self, len: usize) -> CursorResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(CursorError::BufferOverflow {
                requested: len,
                available,
            });
        }
        Ok(())
    }
}
