//! File and stream backed sinks and sources.

use std::io::{self, Read, Write};

use crate::{BufferError, ByteSink, ByteSource};

/// Adapts any [`Write`] into a [`ByteSink`].
///
/// A failed [`append`](ByteSink::append) may leave part of the bytes in the
/// writer, as with [`Write::write_all`]. `bytes_written` only counts
/// completed appends.
///
/// # Examples
///
/// ```
/// use byte_buffer::{ByteSink, IoSink};
///
/// let mut sink = IoSink::new(Vec::new());
/// sink.append(b"abc").unwrap();
/// sink.flush().unwrap();
/// assert_eq!(sink.bytes_written(), 3);
/// assert_eq!(sink.into_inner(), b"abc");
/// ```
#[derive(Debug)]
pub struct IoSink<W: Write> {
    writer: W,
    bytes_written: u64,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes_written: 0,
        }
    }

    /// Bytes appended through this sink, the stream position for a fresh writer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn append(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.writer.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BufferError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
#[derive(Debug)]
pub struct IoSource<R: Read> {
    reader: R,
    bytes_read: u64,
}

impl<R: Read> IoSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes_read: 0,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_into(&mut self, dest: &mut [u8]) -> Result<(), BufferError> {
        match self.reader.read_exact(dest) {
            Ok(()) => {
                self.bytes_read += dest.len() as u64;
                Ok(())
            }
            // The medium cannot say how much was left, only that it ran out.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(BufferError::UnexpectedEnd {
                    requested: dest.len(),
                    available: 0,
                })
            }
            Err(e) => Err(BufferError::Io(e)),
        }
    }
}
