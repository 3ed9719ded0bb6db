//! Packs 32 values of growing width plus two strings into a deliberately tiny
//! buffer, then reads everything back.
//!
//! Run with `RUST_LOG=debug` to see every buffer growth.

use bit_stream::{BitStreamError, BitStreamReader, BitStreamWriter, GrowableByteBuffer};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// Small enough to force several reallocations.
const INITIAL_CAPACITY: usize = 5;
const USED_BITS: usize = 32;

const COLE: &[u8; 11] = b"Hello COLE\0";
const EATING: &[u8; 40] = b"Eating, Sleeping, Coding and Repeating.\0";

fn main() -> Result<(), BitStreamError> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let mut buffer = GrowableByteBuffer::with_capacity(INITIAL_CAPACITY);
    let uncompressed_len = write_to_memory(&mut buffer)?;
    let compressed_len = buffer.bytes_written();

    read_from_memory(&mut buffer)?;

    println!();
    println!(
        "Uncompressed bytes: {} Compressed bytes: {}  Byte difference: {}",
        uncompressed_len,
        compressed_len,
        uncompressed_len - compressed_len
    );
    println!(
        "Buffer grew {} times to {} bytes",
        buffer.growth_count(),
        buffer.capacity()
    );

    Ok(())
}

fn write_to_memory(buffer: &mut GrowableByteBuffer) -> Result<usize, BitStreamError> {
    println!("Write to Memory Stream");
    println!("----------------------");

    let mut writer = BitStreamWriter::new(buffer);
    let mut uncompressed_len = 0;

    let mut bit_mask: i32 = 1;
    for bits in 1..=USED_BITS {
        println!("{:2}bits {:10}", bits, bit_mask);
        writer.write_bits(&bit_mask.to_le_bytes(), bits)?;

        bit_mask |= bit_mask << 1;
        uncompressed_len += size_of::<i32>();
    }

    println!("{}", text(COLE));
    writer.write(COLE)?;
    uncompressed_len += COLE.len();

    println!("{}", text(EATING));
    writer.write(EATING)?;
    uncompressed_len += EATING.len();

    writer.flush()?;
    Ok(uncompressed_len)
}

fn read_from_memory(buffer: &mut GrowableByteBuffer) -> Result<(), BitStreamError> {
    println!();
    println!("Read from Memory Stream");
    println!("-----------------------");

    let mut reader = BitStreamReader::new(buffer);

    for bits in 1..=USED_BITS {
        let mut value = [0u8; 4];
        reader.read_bits(&mut value, bits)?;
        println!("{:2}bits {:10}", bits, i32::from_le_bytes(value));
    }

    let mut cole = [0u8; 11];
    reader.read(&mut cole)?;
    println!("{}", text(&cole));

    let mut eating = [0u8; 40];
    reader.read(&mut eating)?;
    println!("{}", text(&eating));

    Ok(())
}

/// Text up to the first NUL.
fn text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
