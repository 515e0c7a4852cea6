//! Successful Forward Close reply.

use wire::{ByteReader, ByteWriter, Decode, DecodeExact, Encode, OpaqueBuffer, WireResult};

use crate::response_data;

/// Encoded size of a reply without application data.
pub const FORWARD_CLOSE_SUCCESS_MIN_LEN: usize = 2 + 2 + 4 + 2;

/// Reply to a Forward Close request that the target accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardCloseSuccess {
    /// Connection serial number echoed from the request.
    pub connection_sn: u16,
    /// Originator vendor ID echoed from the request.
    pub originator_vendor_id: u16,
    /// Originator serial number echoed from the request.
    pub originator_sn: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "response_data::deserialize")
    )]
    response_data: Option<OpaqueBuffer>,
}

impl ForwardCloseSuccess {
    /// Application data returned by the target, if any.
    #[must_use]
    pub const fn response_data(&self) -> Option<&OpaqueBuffer> {
        self.response_data.as_ref()
    }

    /// Sets the application data; see
    /// [`ForwardOpenSuccess::set_response_data`](crate::ForwardOpenSuccess::set_response_data).
    pub fn set_response_data(&mut self, data: OpaqueBuffer) -> WireResult<()> {
        self.response_data = response_data::normalize(data)?;
        Ok(())
    }

    /// Removes the application data.
    pub fn clear_response_data(&mut self) {
        self.response_data = None;
    }

    /// Interprets the application data as `T`, or `None` if there is none.
    pub fn response_data_as<T: DecodeExact>(&self) -> WireResult<Option<T>> {
        self.response_data
            .as_ref()
            .map(OpaqueBuffer::decode_as::<T>)
            .transpose()
    }
}

impl Encode for ForwardCloseSuccess {
    fn encoded_len(&self) -> usize {
        FORWARD_CLOSE_SUCCESS_MIN_LEN - response_data::TAIL_PREFIX_LEN
            + response_data::encoded_len(self.response_data.as_ref())
    }

    fn encode(&self, writer: &mut ByteWriter<'_>) -> WireResult<()> {
        writer.ensure_capacity(self.encoded_len())?;
        writer.write_u16(self.connection_sn)?;
        writer.write_u16(self.originator_vendor_id)?;
        writer.write_u32(self.originator_sn)?;
        response_data::encode(self.response_data.as_ref(), writer)
    }
}

impl Decode for ForwardCloseSuccess {
    fn decode(reader: &mut ByteReader<'_>) -> WireResult<Self> {
        Ok(Self {
            connection_sn: reader.read_u16()?,
            originator_vendor_id: reader.read_u16()?,
            originator_sn: reader.read_u32()?,
            response_data: response_data::decode(reader)?,
        })
    }
}

impl DecodeExact for ForwardCloseSuccess {
    fn decode_exact(reader: &mut ByteReader<'_>, _len: usize) -> WireResult<Self> {
        Self::decode(reader)
    }
}
