//! Byte-level capabilities a bit stream writes into and reads out of.
//!
//! A [`ByteSink`] only ever appends whole bytes; a [`ByteSource`] only ever
//! yields the next bytes in order. Anything that can do that (the in-memory
//! [`GrowableByteBuffer`], a plain `Vec<u8>`, a byte slice, or a file via
//! [`IoSink`](crate::IoSink)/[`IoSource`](crate::IoSource)) can back a stream.

use crate::{BufferError, GrowableByteBuffer, Vec};

/// Append-only byte destination.
pub trait ByteSink {
    /// Appends all of `bytes`.
    ///
    /// In-memory sinks fail without a partial append. Sinks over an external
    /// medium may have written a prefix of `bytes` when they fail.
    fn append(&mut self, bytes: &[u8]) -> Result<(), BufferError>;

    /// Pushes anything buffered below this sink to its medium.
    fn flush(&mut self) -> Result<(), BufferError> {
        Ok(())
    }
}

/// Sequential byte origin.
pub trait ByteSource {
    /// Fills `dest` with the next `dest.len()` bytes.
    ///
    /// # Errors
    ///
    /// `BufferError::UnexpectedEnd` if the source runs out first.
    fn read_into(&mut self, dest: &mut [u8]) -> Result<(), BufferError>;
}

impl ByteSink for GrowableByteBuffer {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        GrowableByteBuffer::append(self, bytes)
    }
}

impl ByteSource for GrowableByteBuffer {
    #[inline]
    fn read_into(&mut self, dest: &mut [u8]) -> Result<(), BufferError> {
        let bytes = self.read_next(dest.len())?;
        dest.copy_from_slice(bytes);
        Ok(())
    }
}

impl ByteSink for Vec<u8> {
    fn append(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.try_reserve(bytes.len())
            .map_err(|_| BufferError::AllocationFailed(self.len() + bytes.len()))?;
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl ByteSource for &[u8] {
    fn read_into(&mut self, dest: &mut [u8]) -> Result<(), BufferError> {
        if dest.len() > self.len() {
            return Err(BufferError::UnexpectedEnd {
                requested: dest.len(),
                available: self.len(),
            });
        }
        let (head, tail) = self.split_at(dest.len());
        dest.copy_from_slice(head);
        *self = tail;
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        ByteSink::append(&mut **self, bytes)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), BufferError> {
        ByteSink::flush(&mut **self)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_into(&mut self, dest: &mut [u8]) -> Result<(), BufferError> {
        ByteSource::read_into(&mut **self, dest)
    }
}
