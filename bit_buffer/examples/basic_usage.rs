use bit_buffer::{BitBuffer, BitBufferError, Endianness};

fn main() {
    println!("=== Bit Buffer Examples ===\n");

    // Example 1: Packing a header
    let header = match example_header() {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("  failed to write header: {e}");
            return;
        }
    };

    // Example 2: Reading it back, speculatively
    if let Err(e) = example_parse(header) {
        eprintln!("  failed to parse header: {e}");
    }

    // Example 3: Byte order
    let _ = example_byte_order();
}

fn example_header() -> Result<Vec<u8>, BitBufferError> {
    println!("Example 1: Packing a 3-bit version, 5-bit flags and a 12-bit length");

    let mut buffer = BitBuffer::new();
    buffer.write_bits(5, 3)?;
    buffer.write_bits(0b10011, 5)?;
    buffer.write_bits(1500, 12)?;
    buffer.write_c_string("hello")?;

    let bytes = buffer.buffer().to_vec();
    println!("  Packed into {} bytes: {:02x?}", bytes.len(), bytes);
    println!();

    Ok(bytes)
}

fn example_parse(bytes: Vec<u8>) -> Result<(), BitBufferError> {
    println!("Example 2: Peeking before committing to a read");

    let mut buffer = BitBuffer::from_bytes(bytes);
    let version = buffer.peek_bits(3)?;
    println!("  Peeked version {version}, cursor still at {:?}", buffer.cursor());

    buffer.read_bits(3)?;
    let flags = buffer.read_bits(5)?;
    let length = buffer.read_bits(12)?;
    let name = buffer.read_c_string()?;
    println!("  flags={flags:#07b} length={length} name={name:?}");
    println!("  complete: {}", buffer.is_complete());
    println!();

    Ok(())
}

fn example_byte_order() -> Result<(), BitBufferError> {
    println!("Example 3: The same 16-bit value in both byte orders");

    for endianness in [Endianness::Big, Endianness::Little] {
        let mut buffer = BitBuffer::with_endianness(endianness);
        buffer.write_bits(0x1234, 16)?;
        println!("  {endianness:>6}: {:02x?}", buffer.buffer());
    }

    Ok(())
}
