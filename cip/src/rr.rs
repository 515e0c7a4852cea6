//! Decode-only request bodies received over unconnected messaging.
//!
//! These bodies are only ever parsed on this side of the link, so they
//! implement [`Decode`] and [`DecodeExact`] but not [`Encode`](wire::Encode).

use wire::{ByteReader, Decode, DecodeExact, WireResult};

/// Number of 16-bit words in a beam mask.
pub const BEAM_MASK_WORDS: usize = 44;

/// Request to select a measurement report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetFormatRequest {
    pub request_data: u16,
}

impl SetFormatRequest {
    /// Size of the request body in bytes.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        2
    }
}

impl Decode for SetFormatRequest {
    fn decode(reader: &mut ByteReader<'_>) -> WireResult<Self> {
        Ok(Self {
            request_data: reader.read_u16()?,
        })
    }
}

impl DecodeExact for SetFormatRequest {
    fn decode_exact(reader: &mut ByteReader<'_>, _len: usize) -> WireResult<Self> {
        Self::decode(reader)
    }
}

/// Request to set which beams are masked, one bit per beam.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetBeamMaskRequest {
    pub beam_mask: Vec<u16>,
}

impl SetBeamMaskRequest {
    /// Size of the request body in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.beam_mask.len() * 2
    }
}

impl Decode for SetBeamMaskRequest {
    fn decode(reader: &mut ByteReader<'_>) -> WireResult<Self> {
        let mut words = ByteReader::new(reader.read_bytes(BEAM_MASK_WORDS * 2)?);
        let beam_mask = (0..BEAM_MASK_WORDS)
            .map(|_| words.read_u16())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { beam_mask })
    }
}

impl DecodeExact for SetBeamMaskRequest {
    fn decode_exact(reader: &mut ByteReader<'_>, _len: usize) -> WireResult<Self> {
        Self::decode(reader)
    }
}
