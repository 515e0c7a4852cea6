//! Successful Forward Open reply.

use wire::{ByteReader, ByteWriter, Decode, DecodeExact, Encode, OpaqueBuffer, WireResult};

use crate::response_data;

/// Encoded size of a reply without application data.
pub const FORWARD_OPEN_SUCCESS_MIN_LEN: usize = 4 + 4 + 2 + 2 + 4 + 4 + 4 + 2;

/// Reply to a Forward Open request that the target accepted.
///
/// A rejected request produces a different layout, which is not handled
/// here. The message determines its own length from the trailing data size
/// field, so the explicit-length decode ignores the length it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardOpenSuccess {
    /// Originator-to-target connection ID chosen by the target.
    pub o_to_t_connection_id: u32,
    /// Target-to-originator connection ID.
    pub t_to_o_connection_id: u32,
    /// Connection serial number echoed from the request.
    pub connection_sn: u16,
    /// Originator vendor ID echoed from the request.
    pub originator_vendor_id: u16,
    /// Originator serial number echoed from the request.
    pub originator_sn: u32,
    /// Actual originator-to-target packet interval in microseconds.
    pub o_to_t_api: u32,
    /// Actual target-to-originator packet interval in microseconds.
    pub t_to_o_api: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "response_data::deserialize")
    )]
    response_data: Option<OpaqueBuffer>,
}

impl ForwardOpenSuccess {
    /// Application data returned by the target, if any.
    #[must_use]
    pub const fn response_data(&self) -> Option<&OpaqueBuffer> {
        self.response_data.as_ref()
    }

    /// Sets the application data.
    ///
    /// The data must be a whole number of 16-bit words, at most 255 of them.
    /// An empty buffer clears the data.
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

impl Encode for ForwardOpenSuccess {
    fn encoded_len(&self) -> usize {
        FORWARD_OPEN_SUCCESS_MIN_LEN - response_data::TAIL_PREFIX_LEN
            + response_data::encoded_len(self.response_data.as_ref())
    }

    fn encode(&self, writer: &mut ByteWriter<'_>) -> WireResult<()> {
        writer.ensure_capacity(self.encoded_len())?;
        writer.write_u32(self.o_to_t_connection_id)?;
        writer.write_u32(self.t_to_o_connection_id)?;
        writer.write_u16(self.connection_sn)?;
        writer.write_u16(self.originator_vendor_id)?;
        writer.write_u32(self.originator_sn)?;
        writer.write_u32(self.o_to_t_api)?;
        writer.write_u32(self.t_to_o_api)?;
        response_data::encode(self.response_data.as_ref(), writer)
    }
}

impl Decode for ForwardOpenSuccess {
    fn decode(reader: &mut ByteReader<'_>) -> WireResult<Self> {
        Ok(Self {
            o_to_t_connection_id: reader.read_u32()?,
            t_to_o_connection_id: reader.read_u32()?,
            connection_sn: reader.read_u16()?,
            originator_vendor_id: reader.read_u16()?,
            originator_sn: reader.read_u32()?,
            o_to_t_api: reader.read_u32()?,
            t_to_o_api: reader.read_u32()?,
            response_data: response_data::decode(reader)?,
        })
    }
}

impl DecodeExact for ForwardOpenSuccess {
    fn decode_exact(reader: &mut ByteReader<'_>, _len: usize) -> WireResult<Self> {
        Self::decode(reader)
    }
}
