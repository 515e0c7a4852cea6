//! Opaque payload storage for deferred decoding.

use cursor::{ByteReader, ByteWriter};

use crate::codec::{DecodeExact, Encode};
use crate::error::WireResult;

/// A decoded but not yet interpreted byte range.
///
/// Used where a payload's structure belongs to a later decoding stage: the
/// outer frame decodes into an `OpaqueBuffer` bounded by its own length
/// field, and the consumer re-reads those bytes as a concrete message with
/// [`decode_as`](Self::decode_as). An empty buffer is a valid payload and is
/// distinct from having no payload at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpaqueBuffer {
    data: Vec<u8>,
}

impl OpaqueBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Encodes `message` and stores the resulting bytes.
    pub fn from_message<M: Encode + ?Sized>(message: &M) -> WireResult<Self> {
        message.to_vec().map(Self::from)
    }

    /// Returns the stored bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the stored bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Number of stored bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no bytes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Re-interprets the stored bytes as `T`.
    ///
    /// Runs `T`'s explicit-length decode over the stored bytes, with the
    /// stored length as the extent. Fails with whatever `T` raises.
    pub fn decode_as<T: DecodeExact>(&self) -> WireResult<T> {
        T::from_bytes(&self.data)
    }
}

impl From<Vec<u8>> for OpaqueBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for OpaqueBuffer {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl AsRef<[u8]> for OpaqueBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Encode for OpaqueBuffer {
    fn encoded_len(&self) -> usize {
        self.data.len()
    }

    fn encode(&self, writer: &mut ByteWriter<'_>) -> WireResult<()> {
        writer.write_bytes(&self.data)?;
        Ok(())
    }
}

impl DecodeExact for OpaqueBuffer {
    fn decode_exact(reader: &mut ByteReader<'_>, len: usize) -> WireResult<Self> {
        let bytes = reader.read_bytes(len)?;
        Ok(Self::from(bytes))
    }
}
