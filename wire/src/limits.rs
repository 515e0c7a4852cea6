//! Configurable limits for bounded decoding.

/// Wire-level limits for packet decoding.
///
/// Applied by [`EncapPacket::decode_limited`](crate::EncapPacket::decode_limited)
/// before any payload bytes are copied, so a transport can cap how much a
/// single packet may allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum payload length in bytes.
    pub max_payload_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Largest payload the 16-bit length field can declare
            max_payload_bytes: usize::from(u16::MAX),
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_payload_bytes: 512,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_payload_bytes: usize::MAX,
        }
    }
}
