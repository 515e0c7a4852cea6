//! Encapsulation framing and codec traits for the EtherNet/IP codec.
//!
//! This crate defines the [`Encode`], [`Decode`], and [`DecodeExact`]
//! capabilities every wire structure implements, the [`OpaqueBuffer`] used to
//! defer payload interpretation, and the encapsulation packet framing
//! ([`EncapHeader`] + payload). It knows nothing about CIP services or
//! paths, only the structure of packets.
//!
//! # Design Principles
//!
//! - **Byte-exact format** - Field widths and order follow the encapsulation protocol.
//! - **Bounded decoding** - Length fields are checked before payload bytes are copied.
//! - **Caller-owned buffers** - Encoding writes into a buffer the caller provides.
//! - **Capabilities as traits** - Unsupported directions are missing impls, not runtime errors.
//!
//! # Example
//!
//! ```
//! use wire::{DecodeExact, EncapCommand, EncapPacket, Encode, OpaqueBuffer};
//!
//! let body = OpaqueBuffer::from(vec![0x01, 0x00, 0x00, 0x00]);
//! let packet = EncapPacket::with_payload(EncapCommand::REGISTER_SESSION, 0, &body).unwrap();
//! let bytes = packet.to_vec().unwrap();
//!
//! let decoded = EncapPacket::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded.payload().unwrap().as_bytes(), body.as_bytes());
//! ```

mod buffer;
mod codec;
mod error;
mod header;
mod limits;
mod packet;
mod units;

pub use buffer::OpaqueBuffer;
pub use codec::{Decode, DecodeExact, Encode};
pub use error::{WireError, WireResult};
pub use header::{EncapCommand, EncapHeader, ENCAP_HEADER_SIZE};
pub use limits::Limits;
pub use packet::EncapPacket;
pub use units::{bytes_to_words, words_to_bytes, MAX_WORD_FIELD_BYTES, WORD_SIZE};

pub use cursor::{ByteReader, ByteWriter, CursorError};
