//! Bit-level writer over any [`ByteSink`].
//!
//! # Examples
//!
//! ```rust
//! use bit_stream::{BitStreamWriter, GrowableByteBuffer};
//!
//! let mut buffer = GrowableByteBuffer::with_capacity(5);
//! let mut writer = BitStreamWriter::new(&mut buffer);
//!
//! // Three values that would take 12 bytes as plain u32s.
//! writer.write_bits(&5u32.to_le_bytes(), 3).unwrap();
//! writer.write_bits(&1000u32.to_le_bytes(), 10).unwrap();
//! writer.write_bits(&1u32.to_le_bytes(), 1).unwrap();
//! writer.flush().unwrap();
//!
//! assert_eq!(buffer.bytes_written(), 2);
//! ```

use bytemuck::Pod;
use byte_buffer::ByteSink;
use tracing::trace;

use crate::BitStreamError;
use crate::bit_ops::{self, get_bit};
use crate::cursor::BitCursor;

type Result<T> = core::result::Result<T, BitStreamError>;

/// Packs values of arbitrary bit width into whole bytes.
///
/// Bits of each value are taken low to high, starting at the least-significant
/// bit of its first (little-endian) byte, and placed into the pending byte from
/// its most-significant slot downwards. Full bytes go to the sink as soon as
/// they are complete; [`flush`](Self::flush) pads and emits the last partial byte.
///
/// The writer does not flush on drop. Bits still pending when it goes out of
/// scope never reach the sink.
///
/// If the sink rejects a byte, that byte stays pending and
/// [`has_pending`](Self::has_pending) keeps reporting it. The value being
/// written when the error occurred is only partly accepted, so the stream
/// should not be continued.
#[derive(Debug)]
pub struct BitStreamWriter<S: ByteSink> {
    sink: S,
    pending_byte: u8,
    cursor: BitCursor,
    bits_written: u64,
}

impl<S: ByteSink> BitStreamWriter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            pending_byte: 0,
            cursor: BitCursor::first(),
            bits_written: 0,
        }
    }

    /// Writes every bit of `value`.
    ///
    /// Equivalent to `write_bits(value, value.len() * 8)`.
    pub fn write(&mut self, value: &[u8]) -> Result<()> {
        self.write_bits(value, value.len() * 8)
    }

    /// Writes the low `bit_count` bits of the little-endian value in `value`.
    ///
    /// # Errors
    ///
    /// - `BitStreamError::InvalidBitCount` if `bit_count` is zero or exceeds
    ///   `value.len() * 8`. Nothing is written in that case.
    /// - `BitStreamError::Buffer` if the sink rejects a completed byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_stream::BitStreamWriter;
    ///
    /// let mut writer = BitStreamWriter::new(Vec::<u8>::new());
    /// writer.write_bits(&[0b0000_0101], 3).unwrap();
    /// writer.flush().unwrap();
    ///
    /// // LSB first into the MSB slots.
    /// assert_eq!(writer.into_inner(), vec![0b1010_0000]);
    /// ```
    pub fn write_bits(&mut self, value: &[u8], bit_count: usize) -> Result<()> {
        bit_ops::validate_bit_count(bit_count, value.len())?;

        for bit_no in 0..bit_count {
            if get_bit(value, bit_no) {
                self.pending_byte |= self.cursor.mask();
            }
            self.cursor.advance();

            if self.cursor.is_empty() {
                self.emit_pending()?;
            }
        }

        self.bits_written += bit_count as u64;
        Ok(())
    }

    /// Writes the low `bit_count` bits of a plain-old-data value, taken from
    /// its in-memory byte representation.
    pub fn write_value<T: Pod>(&mut self, value: &T, bit_count: usize) -> Result<()> {
        self.write_bits(bytemuck::bytes_of(value), bit_count)
    }

    /// Writes a plain-old-data value at full width.
    pub fn write_pod<T: Pod>(&mut self, value: &T) -> Result<()> {
        self.write(bytemuck::bytes_of(value))
    }

    /// Emits the partial byte, if any bits are pending, then flushes the sink.
    ///
    /// Unused low slots of the emitted byte are zero. With nothing pending no
    /// byte is emitted, so the stream length is always `ceil(bits / 8)`.
    pub fn flush(&mut self) -> Result<()> {
        if self.has_pending() {
            trace!(
                padding = self.cursor.remaining(),
                "padding partial byte on flush"
            );
            self.emit_pending()?;
        }
        self.sink.flush()?;
        Ok(())
    }

    /// Flushes and hands back the sink.
    pub fn finish(mut self) -> Result<S> {
        self.flush()?;
        Ok(self.sink)
    }

    // Pending state is only cleared once the sink has taken the byte.
    fn emit_pending(&mut self) -> Result<()> {
        self.sink.append(&[self.pending_byte])?;
        self.pending_byte = 0;
        self.cursor = BitCursor::first();
        Ok(())
    }

    /// Whether bits are waiting in a partial byte.
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.cursor.is_first()
    }

    /// Bits accepted but not yet emitted as a whole byte.
    #[inline]
    pub fn pending_bits(&self) -> u32 {
        self.cursor.position()
    }

    /// Total bits accepted since creation.
    #[inline]
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Bytes the stream occupies once flushed.
    #[inline]
    pub fn packed_len(&self) -> u64 {
        bit_ops::packed_len(self.bits_written)
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the sink without flushing.
    pub fn into_inner(self) -> S {
        self.sink
    }
}
