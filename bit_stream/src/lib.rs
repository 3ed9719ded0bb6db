//! # bit_stream
//!
//! Packs integers of arbitrary bit width contiguously into a byte sink and
//! unpacks them again, with no byte alignment between successive values.
//!
//! ```rust
//! use bit_stream::{BitStreamReader, BitStreamWriter, GrowableByteBuffer};
//!
//! let mut buffer = GrowableByteBuffer::with_capacity(5);
//!
//! // 32 values with widths 1..=32: 1, 3, 7, ..., 0xFFFF_FFFF
//! let mut writer = BitStreamWriter::new(&mut buffer);
//! let mut value: u32 = 1;
//! for bits in 1..=32 {
//!     writer.write_bits(&value.to_le_bytes(), bits).unwrap();
//!     value |= value << 1;
//! }
//! writer.flush().unwrap();
//!
//! // 528 bits instead of 128 bytes.
//! assert_eq!(buffer.bytes_written(), 66);
//!
//! let mut reader = BitStreamReader::new(&mut buffer);
//! let mut expected: u32 = 1;
//! for bits in 1..=32 {
//!     let mut out = [0u8; 4];
//!     reader.read_bits(&mut out, bits).unwrap();
//!     assert_eq!(u32::from_le_bytes(out), expected);
//!     expected |= expected << 1;
//! }
//! ```
//!
//! ## Wire format
//!
//! The stream is a dense run of bits with no header, length or type tags. A
//! reader must request exactly the bit counts the writer used, in the same
//! order. Multi-byte values use their little-endian byte layout.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitStreamError;

pub mod bit_ops;
mod cursor;

pub mod reader;
pub mod writer;

pub use reader::BitStreamReader;
pub use writer::BitStreamWriter;

pub use byte_buffer::{BufferError, ByteSink, ByteSource, GrowableByteBuffer};

#[cfg(feature = "std")]
pub use byte_buffer::{IoSink, IoSource};
