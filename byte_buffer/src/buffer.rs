use crate::{BufferConfig, BufferError, Vec};
use tracing::debug;

/// Owned, growable byte store with independent read and write cursors.
///
/// Appends land at the write cursor; sequential reads consume from the read
/// cursor over the same storage. When an append does not fit, the backing
/// array is replaced by a larger one grown in whole
/// [`growth_increment`](BufferConfig::growth_increment) steps, and both
/// cursors keep their positions relative to the start of the data.
///
/// Views returned by [`as_slice`](Self::as_slice), [`unread`](Self::unread) and
/// [`read_next`](Self::read_next) borrow the buffer, so they cannot outlive a
/// reallocation.
///
/// Invariant: `read_offset <= write_offset <= capacity`.
///
/// # Examples
///
/// ## Growth keeps earlier data
///
/// ```
/// use byte_buffer::GrowableByteBuffer;
///
/// let mut buffer = GrowableByteBuffer::with_capacity(5);
/// buffer.append(b"Hello COLE\0").unwrap();
/// buffer.append(b"Eating, Sleeping, Coding and Repeating.\0").unwrap();
///
/// assert_eq!(buffer.bytes_written(), 51);
/// assert!(buffer.capacity() >= 51);
/// assert_eq!(&buffer.as_slice()[..10], b"Hello COLE");
/// ```
///
/// ## Reading back
///
/// ```
/// use byte_buffer::GrowableByteBuffer;
///
/// let mut buffer = GrowableByteBuffer::new();
/// buffer.append(&[1, 2, 3]).unwrap();
///
/// assert_eq!(buffer.read_next(2).unwrap(), &[1, 2]);
/// assert_eq!(buffer.remaining(), 1);
/// assert!(buffer.read_next(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GrowableByteBuffer {
    // `data.len()` is the capacity; bytes past `write_offset` are zero.
    data: Vec<u8>,
    write_offset: usize,
    read_offset: usize,
    config: BufferConfig,
    growth_count: usize,
}

impl GrowableByteBuffer {
    /// Creates an empty buffer with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(BufferConfig::default())
    }

    /// Creates an empty buffer with `capacity` bytes preallocated and the
    /// default growth increment.
    ///
    /// Like `Vec::with_capacity`, this aborts if the array cannot be
    /// allocated. Use [`with_config`](Self::with_config) to get
    /// `BufferError::AllocationFailed` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_buffer::GrowableByteBuffer;
    ///
    /// let buffer = GrowableByteBuffer::with_capacity(5);
    /// assert_eq!(buffer.capacity(), 5);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(BufferConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty buffer from an explicit configuration.
    ///
    /// # Errors
    ///
    /// - `BufferError::InvalidGrowthIncrement` if the increment is zero
    /// - `BufferError::AllocationFailed` if the initial array cannot be allocated
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        config.validate()?;
        Ok(Self {
            data: zeroed(config.initial_capacity)?,
            write_offset: 0,
            read_offset: 0,
            config,
            growth_count: 0,
        })
    }

    fn from_parts(config: BufferConfig) -> Self {
        Self {
            data: vec_of_zeros(config.initial_capacity),
            write_offset: 0,
            read_offset: 0,
            config,
            growth_count: 0,
        }
    }

    /// Sizing parameters this buffer grows by.
    #[inline]
    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// Size of the current backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of times the backing array has been replaced.
    #[inline]
    pub fn growth_count(&self) -> usize {
        self.growth_count
    }

    /// Total bytes appended, i.e. the position of the write cursor.
    #[inline]
    pub fn bytes_written(&self) -> usize {
        self.write_offset
    }

    /// Total bytes consumed by sequential reads.
    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.read_offset
    }

    /// Bytes written but not yet read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.write_offset - self.read_offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.write_offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.write_offset == 0
    }

    /// Appends `bytes` at the write cursor, growing the backing array first if
    /// they do not fit.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::AllocationFailed` if the larger array cannot be
    /// allocated. The buffer is left unchanged in that case.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        let required = self
            .write_offset
            .checked_add(bytes.len())
            .ok_or(BufferError::AllocationFailed(usize::MAX))?;

        if required > self.capacity() {
            let new_capacity = self
                .config
                .grown_capacity(self.capacity(), required)
                .ok_or(BufferError::AllocationFailed(usize::MAX))?;
            self.grow_to(new_capacity)?;
        }

        self.data[self.write_offset..required].copy_from_slice(bytes);
        self.write_offset = required;
        Ok(())
    }

    fn grow_to(&mut self, new_capacity: usize) -> Result<(), BufferError> {
        let mut grown = Vec::new();
        grown
            .try_reserve_exact(new_capacity)
            .map_err(|_| BufferError::AllocationFailed(new_capacity))?;
        grown.extend_from_slice(&self.data[..self.write_offset]);
        grown.resize(new_capacity, 0);

        let old_capacity = self.capacity();
        self.data = grown;
        self.growth_count += 1;

        debug!(
            old_capacity,
            new_capacity,
            write_offset = self.write_offset,
            read_offset = self.read_offset,
            "grew byte buffer"
        );
        Ok(())
    }

    /// Returns the next `count` unread bytes and advances the read cursor past them.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::UnexpectedEnd` if fewer than `count` bytes remain
    /// before the write cursor; the read cursor does not move.
    pub fn read_next(&mut self, count: usize) -> Result<&[u8], BufferError> {
        let available = self.remaining();
        if count > available {
            return Err(BufferError::UnexpectedEnd {
                requested: count,
                available,
            });
        }

        let start = self.read_offset;
        self.read_offset += count;
        Ok(&self.data[start..self.read_offset])
    }

    /// All bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.write_offset]
    }

    /// Bytes between the read and write cursors.
    pub fn unread(&self) -> &[u8] {
        &self.data[self.read_offset..self.write_offset]
    }

    /// Moves the read cursor back to the start of the data.
    pub fn rewind(&mut self) {
        self.read_offset = 0;
    }

    /// Discards all data and resets both cursors. Capacity is kept.
    pub fn clear(&mut self) {
        self.data[..self.write_offset].fill(0);
        self.write_offset = 0;
        self.read_offset = 0;
    }

    /// Consumes the buffer, returning the written bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.write_offset);
        self.data
    }
}

impl Default for GrowableByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for GrowableByteBuffer {
    /// Wraps existing bytes as fully written and unread.
    fn from(data: Vec<u8>) -> Self {
        let write_offset = data.len();
        Self {
            data,
            write_offset,
            read_offset: 0,
            config: BufferConfig::default().with_initial_capacity(write_offset),
            growth_count: 0,
        }
    }
}

fn zeroed(len: usize) -> Result<Vec<u8>, BufferError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed(len))?;
    data.resize(len, 0);
    Ok(data)
}

fn vec_of_zeros(len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(len);
    data.resize(len, 0);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLE: &[u8; 11] = b"Hello COLE\0";
    const EATING: &[u8; 40] = b"Eating, Sleeping, Coding and Repeating.\0";

    #[test]
    fn append_and_read_without_growth() -> Result<(), BufferError> {
        let mut buffer = GrowableByteBuffer::with_capacity(8);
        buffer.append(&[1, 2, 3, 4])?;

        assert_eq!(buffer.bytes_written(), 4);
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.growth_count(), 0);

        assert_eq!(buffer.read_next(3)?, &[1, 2, 3]);
        assert_eq!(buffer.bytes_read(), 3);
        assert_eq!(buffer.unread(), &[4]);

        Ok(())
    }

    #[test]
    fn growth_preserves_both_strings() -> Result<(), BufferError> {
        let mut buffer = GrowableByteBuffer::with_capacity(5);
        buffer.append(COLE)?;
        buffer.append(EATING)?;

        assert_eq!(buffer.bytes_written(), COLE.len() + EATING.len());
        assert!(buffer.growth_count() >= 2);

        let mut expected = COLE.to_vec();
        expected.extend_from_slice(EATING);
        assert_eq!(buffer.as_slice(), expected.as_slice());

        Ok(())
    }

    #[test]
    fn growth_never_under_allocates() -> Result<(), BufferError> {
        let config = BufferConfig::new(5, 8);
        let mut buffer = GrowableByteBuffer::with_config(config)?;

        buffer.append(COLE)?;
        assert_eq!(buffer.capacity(), 13);

        // 40 more bytes need five increments in a single step.

        buffer.append(EATING)?;
        assert_eq!(buffer.capacity(), 53);
        assert_eq!(buffer.growth_count(), 2);

        Ok(())
    }

    #[test]
    fn read_cursor_survives_growth() -> Result<(), BufferError> {
        let mut buffer = GrowableByteBuffer::with_capacity(4);
        buffer.append(&[10, 20, 30, 40])?;
        assert_eq!(buffer.read_next(2)?, &[10, 20]);

        buffer.append(&[50, 60, 70, 80, 90])?;
        assert!(buffer.growth_count() > 0);

        assert_eq!(buffer.bytes_read(), 2);
        assert_eq!(buffer.read_next(7)?, &[30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(buffer.remaining(), 0);

        Ok(())
    }

    #[test]
    fn read_past_end_leaves_cursor() -> Result<(), BufferError> {
        let mut buffer = GrowableByteBuffer::new();
        buffer.append(&[1, 2])?;

        assert!(matches!(
            buffer.read_next(3),
            Err(BufferError::UnexpectedEnd {
                requested: 3,
                available: 2
            })
        ));
        assert_eq!(buffer.bytes_read(), 0);
        assert_eq!(buffer.read_next(2)?, &[1, 2]);

        Ok(())
    }

    #[test]
    fn empty_append_does_not_grow() -> Result<(), BufferError> {
        let mut buffer = GrowableByteBuffer::with_capacity(0);
        buffer.append(&[])?;
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.growth_count(), 0);
        assert!(buffer.read_next(0)?.is_empty());

        Ok(())
    }

    #[test]
    fn rewind_clear_and_into_vec() -> Result<(), BufferError> {
        let mut buffer = GrowableByteBuffer::with_capacity(2);
        buffer.append(&[7, 8, 9])?;
        buffer.read_next(3)?;

        buffer.rewind();
        assert_eq!(buffer.unread(), &[7, 8, 9]);

        let capacity = buffer.capacity();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);
        assert_eq!(buffer.remaining(), 0);

        buffer.append(&[1])?;
        assert_eq!(buffer.into_vec(), vec![1]);

        Ok(())
    }

    #[test]
    fn unallocatable_initial_capacity_is_an_error() {
        let result = GrowableByteBuffer::with_config(BufferConfig::new(usize::MAX, 8));
        assert!(matches!(result, Err(BufferError::AllocationFailed(usize::MAX))));
    }

    #[test]
    fn growth_overflow_is_an_error() -> Result<(), BufferError> {
        let config = BufferConfig::new(1, usize::MAX);
        let mut buffer = GrowableByteBuffer::with_config(config)?;
        assert_eq!(buffer.config(), config);
        buffer.append(&[9])?;

        assert!(matches!(
            buffer.append(&[1, 2]),
            Err(BufferError::AllocationFailed(_))
        ));
        assert_eq!(buffer.bytes_written(), 1);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.growth_count(), 0);
        assert_eq!(buffer.as_slice(), &[9]);

        Ok(())
    }

    #[test]
    fn failed_growth_leaves_buffer_unchanged() -> Result<(), BufferError> {
        // One step lands past `isize::MAX`, which no allocator accepts.
        let increment = isize::MAX as usize + 1;
        let mut buffer = GrowableByteBuffer::with_config(BufferConfig::new(4, increment))?;
        buffer.append(&[1, 2, 3])?;
        buffer.read_next(1)?;

        assert!(matches!(
            buffer.append(&[4, 5]),
            Err(BufferError::AllocationFailed(capacity)) if capacity == 4 + increment
        ));
        assert_eq!(buffer.bytes_written(), 3);
        assert_eq!(buffer.bytes_read(), 1);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.as_slice(), &[1, 2, 3]);

        // Still usable within its capacity.
        buffer.append(&[4])?;
        assert_eq!(buffer.unread(), &[2, 3, 4]);

        Ok(())
    }

    #[test]
    fn from_vec_is_readable() -> Result<(), BufferError> {
        let mut buffer = GrowableByteBuffer::from(vec![4, 5, 6]);
        assert_eq!(buffer.bytes_written(), 3);
        assert_eq!(buffer.read_next(3)?, &[4, 5, 6]);

        buffer.append(&[7])?;
        assert_eq!(buffer.as_slice(), &[4, 5, 6, 7]);

        Ok(())
    }
}
