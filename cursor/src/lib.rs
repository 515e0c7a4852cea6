//! Bounds-checked byte cursors for the EtherNet/IP codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for sequential
//! little-endian encoding and decoding over caller-owned buffers.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No protocol knowledge** - This crate knows nothing about packets or paths.
//! - **Explicit errors** - All failures return structured errors, never panic.
//! - **No partial moves** - A failed operation leaves the position unchanged.
//!
//! # Example
//!
//! ```
//! use cursor::{ByteReader, ByteWriter};
//!
//! let mut buf = [0u8; 6];
//! let mut writer = ByteWriter::new(&mut buf);
//! writer.write_u16(0x0065).unwrap();
//! writer.write_u32(42).unwrap();
//! let used = writer.finish();
//!
//! let mut reader = ByteReader::new(&buf[..used]);
//! assert_eq!(reader.read_u16().unwrap(), 0x0065);
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{CursorError, CursorResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
