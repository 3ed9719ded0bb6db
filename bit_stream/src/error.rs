use byte_buffer::BufferError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitStreamError {
    #[cfg_attr(
        feature = "std",
        error("Bit count must be in the range 1..={}, got {bit_count}", .byte_size * 8)
    )]
    InvalidBitCount { bit_count: usize, byte_size: usize },

    #[cfg_attr(feature = "std", error("byte stream error: {0}"))]
    Buffer(#[cfg_attr(feature = "std", from)] BufferError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitStreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitStreamError::InvalidBitCount {
                bit_count,
                byte_size,
            } => write!(
                f,
                "Bit count must be in the range 1..={}, got {}",
                byte_size * 8,
                bit_count
            ),
            BitStreamError::Buffer(e) => write!(f, "byte stream error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<BufferError> for BitStreamError {
    fn from(err: BufferError) -> Self {
        BitStreamError::Buffer(err)
    }
}
