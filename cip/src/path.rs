//! CIP logical path encoding.

use wire::{bytes_to_words, ByteWriter, Encode, WireResult};

/// Logical segment types in their 8-bit logical value form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LogicalType {
    Class = 0x20,
    Instance = 0x24,
    ConnectionPoint = 0x2C,
    Attribute = 0x30,
}

impl LogicalType {
    /// Returns the segment type byte.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Parses a segment type byte.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x20 => Some(Self::Class),
            0x24 => Some(Self::Instance),
            0x2C => Some(Self::ConnectionPoint),
            0x30 => Some(Self::Attribute),
            _ => None,
        }
    }
}

/// Bytes per segment: type tag plus 8-bit value.
const SEGMENT_LEN: usize = 2;

/// A CIP path built from 8-bit logical segments.
///
/// Segments are stored already encoded, in the order they were added. On
/// the wire a path is `[length in words][optional pad][segments]`. Paths
/// are encode-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<u8>,
    pad_after_length: bool,
}

impl Path {
    /// Creates an empty path without a pad byte.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
            pad_after_length: false,
        }
    }

    /// Creates an empty path that writes a pad byte after its length.
    #[must_use]
    pub const fn padded() -> Self {
        Self {
            segments: Vec::new(),
            pad_after_length: true,
        }
    }

    /// Creates a path to `class_id` / `instance_id`.
    #[must_use]
    pub fn to_instance(class_id: u8, instance_id: u8) -> Self {
        let mut path = Self::new();
        path.add_logical_class(class_id)
            .add_logical_instance(instance_id);
        path
    }

    /// Creates a path to `class_id` / `instance_id` / `attribute_id`.
    #[must_use]
    pub fn to_attribute(class_id: u8, instance_id: u8, attribute_id: u8) -> Self {
        let mut path = Self::to_instance(class_id, instance_id);
        path.add_logical_attribute(attribute_id);
        path
    }

    /// Returns whether a pad byte follows the length on encode.
    #[must_use]
    pub const fn pad_after_length(&self) -> bool {
        self.pad_after_length
    }

    /// Enables or disables the pad byte after the length.
    pub fn set_pad_after_length(&mut self, pad: bool) {
        self.pad_after_length = pad;
    }

    /// Adds a class segment.
    pub fn add_logical_class(&mut self, class_id: u8) -> &mut Self {
        self.add_segment(LogicalType::Class, class_id)
    }

    /// Adds an instance segment.
    pub fn add_logical_instance(&mut self, instance_id: u8) -> &mut Self {
        self.add_segment(LogicalType::Instance, instance_id)
    }

    /// Adds an attribute segment.
    pub fn add_logical_attribute(&mut self, attribute_id: u8) -> &mut Self {
        self.add_segment(LogicalType::Attribute, attribute_id)
    }

    /// Adds a connection point segment (usually an assembly instance).
    pub fn add_logical_connection_point(&mut self, connection_point: u8) -> &mut Self {
        self.add_segment(LogicalType::ConnectionPoint, connection_point)
    }

    /// Value of the first class segment, if any.
    #[must_use]
    pub fn logical_class(&self) -> Option<u8> {
        self.segment(LogicalType::Class)
    }

    /// Value of the first instance segment, if any.
    #[must_use]
    pub fn logical_instance(&self) -> Option<u8> {
        self.segment(LogicalType::Instance)
    }

    /// Value of the first attribute segment, if any.
    #[must_use]
    pub fn logical_attribute(&self) -> Option<u8> {
        self.segment(LogicalType::Attribute)
    }

    /// Value of the first connection point segment, if any.
    #[must_use]
    pub fn logical_connection_point(&self) -> Option<u8> {
        self.segment(LogicalType::ConnectionPoint)
    }

    /// Removes all segments. The pad setting is kept.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Returns the encoded segment bytes, without length or pad.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.segments
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Encoded size when written with the given pad setting.
    #[must_use]
    pub fn encoded_len_with_padding(&self, pad_after_length: bool) -> usize {
        1 + usize::from(pad_after_length) + self.segments.len()
    }

    /// Encodes the path with an explicit pad setting, ignoring the stored one.
    ///
    /// Writes [`encoded_len_with_padding`](Self::encoded_len_with_padding)
    /// bytes. Fails with [`WireError::LengthOverflow`](wire::WireError) if the
    /// segments exceed 255 words; nothing is written on failure.
    pub fn encode_with_padding(
        &self,
        writer: &mut ByteWriter<'_>,
        pad_after_length: bool,
    ) -> WireResult<()> {
        let words = bytes_to_words(self.segments.len())?;
        writer.ensure_capacity(self.encoded_len_with_padding(pad_after_length))?;
        writer.write_u8(words)?;
        if pad_after_length {
            writer.write_zeros(1)?;
        }
        writer.write_bytes(&self.segments)?;
        Ok(())
    }

    fn add_segment(&mut self, kind: LogicalType, value: u8) -> &mut Self {
        self.segments.extend_from_slice(&[kind.tag(), value]);
        self
    }

    fn segment(&self, kind: LogicalType) -> Option<u8> {
        self.segments
            .chunks_exact(SEGMENT_LEN)
            .find(|segment| LogicalType::from_tag(segment[0]) == Some(kind))
            .map(|segment| segment[1])
    }
}

impl Encode for Path {
    fn encoded_len(&self) -> usize {
        self.encoded_len_with_padding(self.pad_after_length)
    }

    fn encode(&self, writer: &mut ByteWriter<'_>) -> WireResult<()> {
        self.encode_with_padding(writer, self.pad_after_length)
    }
}
