use crate::BitStreamError;

/// Checks that `bit_count` bits can be taken from (or put into) `byte_size` bytes.
#[inline]
pub fn validate_bit_count(bit_count: usize, byte_size: usize) -> Result<(), BitStreamError> {
    if bit_count == 0 || bit_count > byte_size.saturating_mul(8) {
        return Err(BitStreamError::InvalidBitCount {
            bit_count,
            byte_size,
        });
    }
    Ok(())
}

/// Bytes a packed stream of `total_bits` occupies once flushed.
#[inline]
pub const fn packed_len(total_bits: u64) -> u64 {
    total_bits.div_ceil(8)
}

/// Bit `bit_no` of a little-endian byte sequence, counting from the LSB of byte 0.
#[inline(always)]
pub(crate) fn get_bit(bytes: &[u8], bit_no: usize) -> bool {
    (bytes[bit_no / 8] >> (bit_no % 8)) & 1 == 1
}

/// Sets bit `bit_no` of a little-endian byte sequence.
#[inline(always)]
pub(crate) fn set_bit(bytes: &mut [u8], bit_no: usize) {
    bytes[bit_no / 8] |= 1 << (bit_no % 8);
}
