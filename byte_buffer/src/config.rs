//! Sizing parameters for [`GrowableByteBuffer`](crate::GrowableByteBuffer).

use crate::BufferError;

/// Capacity a buffer starts with when none is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Bytes added per growth step.
pub const DEFAULT_GROWTH_INCREMENT: usize = 8;

/// Initial capacity and growth step of a [`GrowableByteBuffer`](crate::GrowableByteBuffer).
///
/// # Examples
///
/// ```
/// use byte_buffer::{BufferConfig, GrowableByteBuffer};
///
/// let config = BufferConfig::default()
///     .with_initial_capacity(5)
///     .with_growth_increment(16);
/// let buffer = GrowableByteBuffer::with_config(config).unwrap();
/// assert_eq!(buffer.capacity(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    pub initial_capacity: usize,
    pub growth_increment: usize,
}

impl BufferConfig {
    pub const fn new(initial_capacity: usize, growth_increment: usize) -> Self {
        Self {
            initial_capacity,
            growth_increment,
        }
    }

    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub const fn with_growth_increment(mut self, growth_increment: usize) -> Self {
        self.growth_increment = growth_increment;
        self
    }

    /// Rejects a zero growth increment, which could never make room.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.growth_increment == 0 {
            return Err(BufferError::InvalidGrowthIncrement);
        }
        Ok(())
    }

    /// Smallest capacity reachable from `current` in whole increments that holds
    /// `required` bytes, or `None` if it does not fit in `usize`.
    pub(crate) fn grown_capacity(&self, current: usize, required: usize) -> Option<usize> {
        if required <= current {
            return Some(current);
        }
        let deficit = required - current;
        let steps = deficit.div_ceil(self.growth_increment);
        steps
            .checked_mul(self.growth_increment)
            .and_then(|extra| current.checked_add(extra))
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_CAPACITY, DEFAULT_GROWTH_INCREMENT)
    }
}
