//! Bit-level reader over any [`ByteSource`].

use bytemuck::Pod;
use byte_buffer::ByteSource;

use crate::BitStreamError;
use crate::bit_ops::{self, set_bit};
use crate::cursor::BitCursor;

type Result<T> = core::result::Result<T, BitStreamError>;

/// Reconstructs values written by a [`BitStreamWriter`](crate::BitStreamWriter).
///
/// Bits are taken from the pending byte most-significant first and placed into
/// the destination least-significant first, the mirror of the writer. Reading
/// with the same sequence of bit counts the writer used gives back every value
/// exactly. The stream carries no schema: any other sequence silently decodes
/// different values.
///
/// # Examples
///
/// ```
/// use bit_stream::{BitStreamReader, BitStreamWriter, GrowableByteBuffer};
///
/// let mut buffer = GrowableByteBuffer::new();
/// let mut writer = BitStreamWriter::new(&mut buffer);
/// writer.write_bits(&300u16.to_le_bytes(), 9).unwrap();
/// writer.write_bits(&[1], 1).unwrap();
/// writer.flush().unwrap();
///
/// let mut reader = BitStreamReader::new(&mut buffer);
/// let mut value = [0u8; 2];
/// reader.read_bits(&mut value, 9).unwrap();
/// assert_eq!(u16::from_le_bytes(value), 300);
///
/// let mut flag = [0u8; 1];
/// reader.read_bits(&mut flag, 1).unwrap();
/// assert_eq!(flag, [1]);
/// ```
#[derive(Debug)]
pub struct BitStreamReader<S: ByteSource> {
    source: S,
    pending_byte: u8,
    cursor: BitCursor,
    bits_read: u64,
}

impl<S: ByteSource> BitStreamReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending_byte: 0,
            cursor: BitCursor::empty(),
            bits_read: 0,
        }
    }

    /// Fills every bit of `buf`.
    ///
    /// Equivalent to `read_bits(buf, buf.len() * 8)`.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        self.read_bits(buf, buf.len() * 8)
    }

    /// Reads `bit_count` bits into the low bits of the little-endian value in
    /// `buf`. All bits of `buf` above `bit_count` are zero afterwards.
    ///
    /// # Errors
    ///
    /// - `BitStreamError::InvalidBitCount` if `bit_count` is zero or exceeds
    ///   `buf.len() * 8`. Nothing is consumed in that case.
    /// - `BitStreamError::Buffer` if the source runs out of bytes.
    pub fn read_bits(&mut self, buf: &mut [u8], bit_count: usize) -> Result<()> {
        bit_ops::validate_bit_count(bit_count, buf.len())?;

        buf.fill(0);

        for bit_no in 0..bit_count {
            if self.cursor.is_empty() {
                self.fetch()?;
            }
            if self.pending_byte & self.cursor.mask() != 0 {
                set_bit(buf, bit_no);
            }
            self.cursor.advance();
        }

        self.bits_read += bit_count as u64;
        Ok(())
    }

    /// Reads the low `bit_count` bits of a plain-old-data value. Higher bits
    /// of its byte representation are zero.
    pub fn read_value<T: Pod>(&mut self, bit_count: usize) -> Result<T> {
        let mut value = T::zeroed();
        self.read_bits(bytemuck::bytes_of_mut(&mut value), bit_count)?;
        Ok(value)
    }

    /// Reads a plain-old-data value at full width.
    pub fn read_pod<T: Pod>(&mut self) -> Result<T> {
        self.read_value(core::mem::size_of::<T>() * 8)
    }

    /// Drops the rest of the current byte, so the next read starts on a fresh one.
    ///
    /// Pairs with a writer [`flush`](crate::BitStreamWriter::flush) in the
    /// middle of a stream, which pads the partial byte.
    pub fn align_to_byte(&mut self) {
        self.cursor = BitCursor::empty();
    }

    fn fetch(&mut self) -> Result<()> {
        let mut byte = [0u8; 1];
        self.source.read_into(&mut byte)?;
        self.pending_byte = byte[0];
        self.cursor = BitCursor::first();
        Ok(())
    }

    /// Bits of the last fetched byte not yet consumed.
    #[inline]
    pub fn buffered_bits(&self) -> u32 {
        self.cursor.remaining()
    }

    /// Total bits read since creation.
    #[inline]
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
