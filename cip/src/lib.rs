//! CIP paths and connection manager replies for the EtherNet/IP codec.
//!
//! Builds on the `wire` crate's codec traits to provide logical [`Path`]
//! encoding, the Forward Open / Forward Close success replies, and a pair of
//! decode-only request bodies. Each type implements exactly the directions
//! it supports.
//!
//! | type                    | `Encode` | `Decode` | `DecodeExact` |
//! |-------------------------|----------|----------|---------------|
//! | [`Path`]                | yes      | no       | no            |
//! | [`ForwardOpenSuccess`]  | yes      | yes      | yes           |
//! | [`ForwardCloseSuccess`] | yes      | yes      | yes           |
//! | [`SetFormatRequest`]    | no       | yes      | yes           |
//! | [`SetBeamMaskRequest`]  | no       | yes      | yes           |
//!
//! # Example
//!
//! ```
//! use cip::{ForwardCloseSuccess, Path};
//! use wire::{DecodeExact, EncapCommand, EncapPacket, Encode};
//!
//! let mut path = Path::new();
//! path.add_logical_class(6).add_logical_instance(1);
//! assert_eq!(path.to_vec().unwrap(), [2, 0x20, 6, 0x24, 1]);
//!
//! let mut reply = ForwardCloseSuccess::default();
//! reply.connection_sn = 7;
//! reply.originator_vendor_id = 0x4D;
//! reply.originator_sn = 99;
//! let packet = EncapPacket::with_payload(EncapCommand::SEND_RR_DATA, 1, &reply).unwrap();
//! let decoded = EncapPacket::from_bytes(&packet.to_vec().unwrap()).unwrap();
//! assert_eq!(decoded.payload_as::<ForwardCloseSuccess>().unwrap(), reply);
//! ```

mod forward_close;
mod forward_open;
mod path;
mod response_data;
mod rr;

pub use forward_close::{ForwardCloseSuccess, FORWARD_CLOSE_SUCCESS_MIN_LEN};
pub use forward_open::{ForwardOpenSuccess, FORWARD_OPEN_SUCCESS_MIN_LEN};
pub use path::{LogicalType, Path};
pub use rr::{SetBeamMaskRequest, SetFormatRequest, BEAM_MASK_WORDS};
