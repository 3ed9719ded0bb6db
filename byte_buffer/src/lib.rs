//! # byte_buffer
//!
//! An owned, growable byte store with independent read and write cursors,
//! plus the [`ByteSink`] / [`ByteSource`] capabilities that bit-level
//! writers and readers are built on.
//!
//! ```rust
//! use byte_buffer::GrowableByteBuffer;
//!
//! let mut buffer = GrowableByteBuffer::with_capacity(4);
//! buffer.append(b"Hello, world").unwrap();
//! assert_eq!(buffer.bytes_written(), 12);
//!
//! assert_eq!(buffer.read_next(5).unwrap(), b"Hello");
//! assert_eq!(buffer.unread(), b", world");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::vec::Vec;

#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;

pub mod buffer;
pub mod config;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod stream;

pub use buffer::GrowableByteBuffer;
pub use config::BufferConfig;
pub use error::BufferError;
#[cfg(feature = "std")]
pub use io::{IoSink, IoSource};
pub use stream::{ByteSink, ByteSource};
