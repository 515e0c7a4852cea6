//! Encode/decode capability traits shared by every wire structure.
//!
//! Direction support is expressed by which traits a type implements rather
//! than by runtime failures: a path is [`Encode`] only, request bodies are
//! [`Decode`] only, and an [`OpaqueBuffer`](crate::OpaqueBuffer) can only be
//! decoded when its extent is given ([`DecodeExact`]).

use cursor::{ByteReader, ByteWriter};

use crate::error::WireResult;

/// A structure that can be written to the wire.
pub trait Encode {
    /// Number of bytes [`encode`](Self::encode) will write.
    ///
    /// Must be pure and agree exactly with what `encode` produces.
    fn encoded_len(&self) -> usize;

    /// Writes exactly [`encoded_len`](Self::encoded_len) bytes.
    ///
    /// Fails with a bounds error if the writer lacks room.
    fn encode(&self, writer: &mut ByteWriter<'_>) -> WireResult<()>;

    /// Encodes into a freshly allocated, exactly sized buffer.
    fn to_vec(&self) -> WireResult<Vec<u8>> {
        let mut buf = vec![0u8; self.encoded_len()];
        let mut writer = ByteWriter::new(&mut buf);
        self.encode(&mut writer)?;
        let used = writer.finish();
        buf.truncate(used);
        Ok(buf)
    }
}

/// A structure whose own fields determine how many bytes it consumes.
pub trait Decode: Sized {
    /// Decodes a value, consuming a self-describing number of bytes.
    fn decode(reader: &mut ByteReader<'_>) -> WireResult<Self>;
}

/// A structure decoded with an extent supplied by an enclosing frame.
pub trait DecodeExact: Sized {
    /// Decodes a value that occupies `len` bytes of `reader`.
    fn decode_exact(reader: &mut ByteReader<'_>, len: usize) -> WireResult<Self>;

    /// Decodes a value spanning the whole of `bytes`.
    fn from_bytes(bytes: &[u8]) -> WireResult<Self> {
        let mut reader = ByteReader::new(bytes);
        Self::decode_exact(&mut reader, bytes.len())
    }
}
