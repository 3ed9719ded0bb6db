//! Packs a run of small counters into a file and reads them back.
//!
//! Usage: `cargo run --example file_stream [path]`

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use bit_stream::{BitStreamError, BitStreamReader, BitStreamWriter, IoSink, IoSource};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const COUNTER_BITS: usize = 5;

fn main() -> Result<(), BitStreamError> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("bit_stream_counters.bin"));

    // Values 0..=31 fit in 5 bits.
    let counters: Vec<u8> = (0..100u32).map(|i| (i * 7 % 32) as u8).collect();

    let file = File::create(&path).map_err(byte_buffer_io)?;
    let mut writer = BitStreamWriter::new(IoSink::new(BufWriter::new(file)));
    for counter in &counters {
        writer.write_bits(&[*counter], COUNTER_BITS)?;
    }
    let sink = writer.finish()?;
    info!(path = %path.display(), bytes = sink.bytes_written(), "wrote counters");

    let file = File::open(&path).map_err(byte_buffer_io)?;
    let mut reader = BitStreamReader::new(IoSource::new(file));
    for (i, expected) in counters.iter().enumerate() {
        let mut value = [0u8; 1];
        reader.read_bits(&mut value, COUNTER_BITS)?;
        assert_eq!(value[0], *expected, "counter {} differs", i);
    }

    println!(
        "{} counters: {} bytes unpacked, {} bytes packed in {}",
        counters.len(),
        counters.len(),
        sink.bytes_written(),
        path.display()
    );
    Ok(())
}

fn byte_buffer_io(e: std::io::Error) -> BitStreamError {
    BitStreamError::Buffer(e.into())
}
