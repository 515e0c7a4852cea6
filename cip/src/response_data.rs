//! Trailing application data shared by connection manager replies.
//!
//! Wire layout: `[size in words: u8][reserved: u8][data]`. Absent data is
//! written as two zero bytes.

use tracing::trace;
use wire::{
    bytes_to_words, words_to_bytes, ByteReader, ByteWriter, DecodeExact, Encode, OpaqueBuffer,
    WireResult,
};

/// Size of the word count and reserved byte.
pub(crate) const TAIL_PREFIX_LEN: usize = 2;

pub(crate) fn encoded_len(data: Option<&OpaqueBuffer>) -> usize {
    TAIL_PREFIX_LEN + data.map_or(0, OpaqueBuffer::len)
}

/// Checks that `data` can be described by the word count, and drops empty
/// buffers since they decode as absent.
pub(crate) fn normalize(data: OpaqueBuffer) -> WireResult<Option<OpaqueBuffer>> {
    bytes_to_words(data.len())?;
    Ok((!data.is_empty()).then_some(data))
}

pub(crate) fn encode(data: Option<&OpaqueBuffer>, writer: &mut ByteWriter<'_>) -> WireResult<()> {
    match data {
        Some(data) => {
            writer.write_u8(bytes_to_words(data.len())?)?;
            writer.write_zeros(1)?;
            data.encode(writer)
        }
        None => Ok(writer.write_zeros(TAIL_PREFIX_LEN)?),
    }
}

pub(crate) fn decode(reader: &mut ByteReader<'_>) -> WireResult<Option<OpaqueBuffer>> {
    let words = reader.read_u8()?;
    reader.skip(1)?;
    if words == 0 {
        return Ok(None);
    }
    let data = OpaqueBuffer::decode_exact(reader, words_to_bytes(words))?;
    trace!(words, bytes = data.len(), "decoded connection response data");
    Ok(Some(data))
}

/// Deserializes a response data field through [`normalize`], so serialized
/// replies obey the same size rules as `set_response_data`.
#[cfg(feature = "serde")]
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<OpaqueBuffer>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Option::<OpaqueBuffer>::deserialize(deserializer)?
        .map_or(Ok(None), normalize)
        .map_err(serde::de::Error::custom)
}
