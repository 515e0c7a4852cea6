//! Encapsulation packet framing.

use cursor::{ByteReader, ByteWriter};
use tracing::{debug, warn};

use crate::buffer::OpaqueBuffer;
use crate::codec::{Decode, DecodeExact, Encode};
use crate::error::{WireError, WireResult};
use crate::header::{EncapCommand, EncapHeader, ENCAP_HEADER_SIZE};
use crate::limits::Limits;

/// An encapsulation header followed by an optional opaque payload.
///
/// Encoding writes `header` exactly as it is. Keeping `header.length` equal
/// to the payload size is the caller's job; [`set_payload`](Self::set_payload)
/// and [`with_payload`](Self::with_payload) do it for you. Decoding always
/// yields the payload as an [`OpaqueBuffer`]; use
/// [`payload_as`](Self::payload_as) to interpret it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncapPacket {
    /// Encapsulation header, written verbatim on encode.
    pub header: EncapHeader,
    payload: Option<OpaqueBuffer>,
}

impl EncapPacket {
    /// Creates a packet with the given header and no payload.
    #[must_use]
    pub const fn new(header: EncapHeader) -> Self {
        Self {
            header,
            payload: None,
        }
    }

    /// Creates a packet for `command` carrying `message` as its payload.
    ///
    /// The header length is set from the encoded message.
    pub fn with_payload<M: Encode + ?Sized>(
        command: EncapCommand,
        session_handle: u32,
        message: &M,
    ) -> WireResult<Self> {
        let mut packet = Self::new(EncapHeader::new(command, session_handle));
        packet.set_payload(message)?;
        Ok(packet)
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&OpaqueBuffer> {
        self.payload.as_ref()
    }

    /// Removes and returns the payload, leaving `header.length` untouched.
    pub fn take_payload(&mut self) -> Option<OpaqueBuffer> {
        self.payload.take()
    }

    /// Encodes `message` as the payload and updates `header.length`.
    ///
    /// A message that encodes to zero bytes leaves the packet without a
    /// payload, matching how such a packet decodes. On error the packet is
    /// left unchanged.
    pub fn set_payload<M: Encode + ?Sized>(&mut self, message: &M) -> WireResult<()> {
        let payload = OpaqueBuffer::from_message(message)?;
        self.header.set_payload_len(payload.len())?;
        self.payload = (!payload.is_empty()).then_some(payload);
        Ok(())
    }

    /// Drops the payload and zeroes `header.length`.
    pub fn clear_payload(&mut self) {
        self.payload = None;
        self.header.length = 0;
    }

    /// Re-interprets the payload bytes as `T`.
    ///
    /// Fails with [`WireError::MissingPayload`] if the packet has no payload,
    /// or with whatever error `T`'s decode raises.
    pub fn payload_as<T: DecodeExact>(&self) -> WireResult<T> {
        self.payload
            .as_ref()
            .ok_or(WireError::MissingPayload)?
            .decode_as()
    }

    /// Decodes a packet, rejecting payloads larger than `limits` allows.
    ///
    /// The check happens after the header is read and before any payload
    /// bytes are copied.
    pub fn decode_limited(reader: &mut ByteReader<'_>, limits: &Limits) -> WireResult<Self> {
        let header = EncapHeader::decode(reader)?;
        let payload_len = usize::from(header.length);
        if payload_len > limits.max_payload_bytes {
            debug!(
                payload_len,
                limit = limits.max_payload_bytes,
                "encapsulation payload exceeds limit"
            );
            return Err(WireError::PayloadTooLarge {
                actual: payload_len,
                limit: limits.max_payload_bytes,
            });
        }
        let payload = decode_payload(reader, &header)?;
        Ok(Self { header, payload })
    }
}

fn decode_payload(
    reader: &mut ByteReader<'_>,
    header: &EncapHeader,
) -> WireResult<Option<OpaqueBuffer>> {
    if header.length == 0 {
        return Ok(None);
    }
    OpaqueBuffer::decode_exact(reader, usize::from(header.length)).map(Some)
}

impl Encode for EncapPacket {
    fn encoded_len(&self) -> usize {
        ENCAP_HEADER_SIZE + self.payload.as_ref().map_or(0, OpaqueBuffer::len)
    }

    fn encode(&self, writer: &mut ByteWriter<'_>) -> WireResult<()> {
        let payload_len = self.payload.as_ref().map_or(0, OpaqueBuffer::len);
        if usize::from(self.header.length) != payload_len {
            warn!(
                declared = self.header.length,
                actual = payload_len,
                "encoding packet whose header length disagrees with its payload"
            );
        }
        writer.ensure_capacity(self.encoded_len())?;
        self.header.encode(writer)?;
        if let Some(payload) = &self.payload {
            payload.encode(writer)?;
        }
        Ok(())
    }
}

impl Decode for EncapPacket {
    fn decode(reader: &mut ByteReader<'_>) -> WireResult<Self> {
        let header = EncapHeader::decode(reader)?;
        let payload = decode_payload(reader, &header)?;
        Ok(Self { header, payload })
    }
}

impl DecodeExact for EncapPacket {
    fn decode_exact(reader: &mut ByteReader<'_>, len: usize) -> WireResult<Self> {
        if len < ENCAP_HEADER_SIZE {
            debug!(len, "decode length shorter than encapsulation header");
            return Err(WireError::LengthTooShort {
                length: len,
                required: ENCAP_HEADER_SIZE,
            });
        }
        let header = EncapHeader::decode(reader)?;
        if len != header.packet_len() {
            debug!(
                len,
                declared = header.packet_len(),
                "decode length disagrees with encapsulation header"
            );
            return Err(WireError::LengthMismatch {
                given: len,
                declared: header.packet_len(),
            });
        }
        let payload = decode_payload(reader, &header)?;
        Ok(Self { header, payload })
    }
}
