//! Property-based tests for GrowableByteBuffer and the sink/source adapters.

use proptest::prelude::*;
use tempfile::NamedTempFile;

use byte_buffer::{BufferConfig, ByteSink, ByteSource, GrowableByteBuffer, IoSink, IoSource};

fn chunks_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..32)
}

//
// -----------------------------------------------------------------------------
// Growth
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_growth_preserves_data(
        ref chunks in chunks_strategy(),
        initial in 0usize..16,
        increment in 1usize..16,
    ) {
        let config = BufferConfig::new(initial, increment);
        let mut buffer = GrowableByteBuffer::with_config(config).unwrap();

        let mut expected = Vec::new();
        for chunk in chunks {
            buffer.append(chunk).unwrap();
            expected.extend_from_slice(chunk);

            // Everything appended so far is still intact after each growth.
            prop_assert_eq!(buffer.as_slice(), expected.as_slice());
        }

        prop_assert_eq!(buffer.bytes_written(), expected.len());
        prop_assert!(buffer.capacity() >= buffer.bytes_written());

        // Capacity only ever moves in whole increments.
        prop_assert_eq!((buffer.capacity() - initial) % increment, 0);
    }
}

proptest! {
    #[test]
    fn prop_interleaved_reads_and_appends(
        ref chunks in chunks_strategy(),
        ref read_sizes in prop::collection::vec(0usize..48, 0..32),
    ) {
        let mut buffer = GrowableByteBuffer::with_capacity(3);
        let mut expected = Vec::new();
        let mut consumed = 0usize;

        for (i, chunk) in chunks.iter().enumerate() {
            buffer.append(chunk).unwrap();
            expected.extend_from_slice(chunk);

            let want = read_sizes.get(i).copied().unwrap_or(0);
            let available = expected.len() - consumed;
            if want <= available {
                let got = buffer.read_next(want).unwrap();
                prop_assert_eq!(got, &expected[consumed..consumed + want]);
                consumed += want;
            } else {
                prop_assert!(buffer.read_next(want).is_err());
            }

            prop_assert_eq!(buffer.bytes_read(), consumed);
            prop_assert_eq!(buffer.unread(), &expected[consumed..]);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Sinks and sources
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_file_sink_matches_memory(ref chunks in chunks_strategy()) {
        let file = NamedTempFile::new().unwrap();

        let mut memory = GrowableByteBuffer::new();
        let mut sink = IoSink::new(file.reopen().unwrap());
        for chunk in chunks {
            ByteSink::append(&mut memory, chunk).unwrap();
            sink.append(chunk).unwrap();
        }
        sink.flush().unwrap();
        prop_assert_eq!(sink.bytes_written(), memory.bytes_written() as u64);

        let mut source = IoSource::new(file.reopen().unwrap());
        let mut from_file = vec![0u8; memory.bytes_written()];
        source.read_into(&mut from_file).unwrap();
        prop_assert_eq!(from_file.as_slice(), memory.as_slice());
    }
}
