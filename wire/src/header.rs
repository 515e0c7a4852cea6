//! Encapsulation header types and constants.

use cursor::{ByteReader, ByteWriter};

use crate::codec::{Decode, DecodeExact, Encode};
use crate::error::{WireError, WireResult};

/// Encapsulation header size in bytes (24 total).
pub const ENCAP_HEADER_SIZE: usize = 2 + 2 + 4 + 4 + 8 + 4;

/// Encapsulation command code.
///
/// Unknown codes are carried through unchanged; this layer does not
/// dispatch on the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncapCommand(u16);

impl EncapCommand {
    pub const NOP: Self = Self(0x0000);
    pub const LIST_SERVICES: Self = Self(0x0004);
    pub const LIST_IDENTITY: Self = Self(0x0063);
    pub const LIST_INTERFACES: Self = Self(0x0064);
    pub const REGISTER_SESSION: Self = Self(0x0065);
    pub const UNREGISTER_SESSION: Self = Self(0x0066);
    pub const SEND_RR_DATA: Self = Self(0x006F);
    pub const SEND_UNIT_DATA: Self = Self(0x0070);
    pub const INDICATE_STATUS: Self = Self(0x0072);
    pub const CANCEL: Self = Self(0x0073);

    /// Creates a command from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw command code.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns `true` if the code is one of the standard commands.
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(
            self.0,
            0x0000 | 0x0004 | 0x0063 | 0x0064 | 0x0065 | 0x0066 | 0x006F | 0x0070 | 0x0072 | 0x0073
        )
    }
}

/// Encapsulation header.
///
/// Only `length` matters to framing: it is the number of payload bytes
/// following the header. The remaining fields are carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncapHeader {
    /// Encapsulation command.
    pub command: EncapCommand,
    /// Payload length in bytes.
    pub length: u16,
    /// Session handle assigned by the target.
    pub session_handle: u32,
    /// Encapsulation status (0 = success).
    pub status: u32,
    /// Opaque context echoed back by the target.
    pub sender_context: [u8; 8],
    /// Option flags.
    pub options: u32,
}

impl EncapHeader {
    /// Creates a header for `command` on `session_handle` with no payload.
    #[must_use]
    pub const fn new(command: EncapCommand, session_handle: u32) -> Self {
        Self {
            command,
            length: 0,
            session_handle,
            status: 0,
            sender_context: [0; 8],
            options: 0,
        }
    }

    /// Sets `length` from a payload byte count.
    ///
    /// Fails with [`WireError::LengthOverflow`] if `payload_len` does not fit
    /// the 16-bit length field.
    pub fn set_payload_len(&mut self, payload_len: usize) -> WireResult<()> {
        self.length = u16::try_from(payload_len).map_err(|_| WireError::LengthOverflow {
            length: payload_len,
            max: usize::from(u16::MAX),
        })?;
        Ok(())
    }

    /// Total packet size this header declares (header plus payload).
    #[must_use]
    pub fn packet_len(&self) -> usize {
        ENCAP_HEADER_SIZE + usize::from(self.length)
    }
}

impl Encode for EncapHeader {
    fn encoded_len(&self) -> usize {
        ENCAP_HEADER_SIZE
    }

    fn encode(&self, writer: &mut ByteWriter<'_>) -> WireResult<()> {
        writer.ensure_capacity(ENCAP_HEADER_SIZE)?;
        writer.write_u16(self.command.raw())?;
        writer.write_u16(self.length)?;
        writer.write_u32(self.session_handle)?;
        writer.write_u32(self.status)?;
        writer.write_bytes(&self.sender_context)?;
        writer.write_u32(self.options)?;
        Ok(())
    }
}

impl Decode for EncapHeader {
    fn decode(reader: &mut ByteReader<'_>) -> WireResult<Self> {
        let bytes = reader.read_bytes(ENCAP_HEADER_SIZE)?;
        let mut fields = ByteReader::new(bytes);
        Ok(Self {
            command: EncapCommand::from_raw(fields.read_u16()?),
            length: fields.read_u16()?,
            session_handle: fields.read_u32()?,
            status: fields.read_u32()?,
            sender_context: fields.read_array()?,
            options: fields.read_u32()?,
        })
    }
}

impl DecodeExact for EncapHeader {
    fn decode_exact(reader: &mut ByteReader<'_>, len: usize) -> WireResult<Self> {
        if len != ENCAP_HEADER_SIZE {
            return Err(WireError::LengthMismatch {
                given: len,
                declared: ENCAP_HEADER_SIZE,
            });
        }
        Self::decode(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> EncapHeader {
        EncapHeader {
            command: EncapCommand::SEND_RR_DATA,
            length: 0x0010,
            session_handle: 0x1122_3344,
            status: 0,
            sender_context: *b"ctx-0001",
            options: 0,
        }
    }

    #[test]
    fn header_size_is_correct() {
        // command(2) + length(2) + session(4) + status(4) + context(8) + options(4)
        assert_eq!(ENCAP_HEADER_SIZE, 24);
    }

    #[test]
    fn command_constants() {
        assert_eq!(EncapCommand::REGISTER_SESSION.raw(), 0x65);
        assert_eq!(EncapCommand::SEND_RR_DATA.raw(), 0x6F);
        assert!(EncapCommand::SEND_UNIT_DATA.is_known());
        assert!(!EncapCommand::from_raw(0x1234).is_known());
        assert_eq!(EncapCommand::default(), EncapCommand::NOP);
    }

    #[test]
    fn encode_layout() {
        let header = sample_header();
        let bytes = header.to_vec().unwrap();
        assert_eq!(bytes.len(), ENCAP_HEADER_SIZE);
        assert_eq!(&bytes[0..2], &[0x6F, 0x00]);
        assert_eq!(&bytes[2..4], &[0x10, 0x00]);
        assert_eq!(&bytes[4..8], &[0x44, 0x33, 0x22, 0x11]);
        assert_eq!(&bytes[8..12], &[0, 0, 0, 0]);
        assert_eq!(&bytes[12..20], b"ctx-0001");
        assert_eq!(&bytes[20..24], &[0, 0, 0, 0]);
    }

    #[test]
    fn decode_matches_encode() {
        let header = sample_header();
        let bytes = header.to_vec().unwrap();
        let decoded = EncapHeader::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn decode_truncated_fails_without_advancing() {
        let bytes = sample_header().to_vec().unwrap();
        let mut reader = ByteReader::new(&bytes[..20]);
        assert!(EncapHeader::decode(&mut reader).is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn decode_exact_wrong_length() {
        let bytes = sample_header().to_vec().unwrap();
        let mut reader = ByteReader::new(&bytes);
        let err = EncapHeader::decode_exact(&mut reader, 23).unwrap_err();
        assert!(matches!(err, WireError::LengthMismatch { .. }));
    }

    #[test]
    fn encode_short_buffer_writes_nothing() {
        let mut buf = [0xAAu8; 10];
        let mut writer = ByteWriter::new(&mut buf);
        assert!(sample_header().encode(&mut writer).is_err());
        assert_eq!(writer.finish(), 0);
        assert_eq!(buf, [0xAA; 10]);
    }

    #[test]
    fn set_payload_len_overflow() {
        let mut header = EncapHeader::new(EncapCommand::SEND_RR_DATA, 1);
        header.set_payload_len(40).unwrap();
        assert_eq!(header.length, 40);
        assert_eq!(header.packet_len(), 64);
        let err = header.set_payload_len(70_000).unwrap_err();
        assert!(matches!(err, WireError::LengthOverflow { .. }));
        assert_eq!(header.length, 40);
    }

    #[test]
    fn header_const_constructible() {
        const HEADER: EncapHeader = EncapHeader::new(EncapCommand::NOP, 0);
        assert_eq!(HEADER.length, 0);
    }
}
