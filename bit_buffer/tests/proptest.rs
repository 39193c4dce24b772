// tests/proptest.rs

use bit_buffer::{BitBuffer, Endianness};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// Generate a bit count together with a value that fits in it
fn width_and_value() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=32).prop_flat_map(|n| {
        let max_val = if n == 32 { u32::MAX } else { (1u32 << n) - 1 };
        (Just(n), 0..=max_val)
    })
}

/// Reads `bits` bits in chunks of at most 32.
fn consume_bits(buffer: &mut BitBuffer, mut bits: usize) {
    while bits > 0 {
        let chunk = bits.min(32) as u32;
        buffer.read_bits(chunk).unwrap();
        bits -= chunk as usize;
    }
}

//
// -----------------------------------------------------------------------------
// Round trips
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_single_field_roundtrip((n, value) in width_and_value()) {
        let mut buffer = BitBuffer::new();
        buffer.write_bits(value, n).unwrap();

        buffer.seek(0).unwrap();
        prop_assert_eq!(buffer.read_bits(n).unwrap(), value);
    }
}

proptest! {
    #[test]
    fn prop_field_sequence_roundtrip(fields in prop::collection::vec(width_and_value(), 1..100)) {
        let mut buffer = BitBuffer::new();
        for &(n, value) in &fields {
            buffer.write_bits(value, n).unwrap();
        }

        let total_bits: u32 = fields.iter().map(|&(n, _)| n).sum();
        prop_assert_eq!(buffer.buffer().len(), total_bits.div_ceil(8) as usize);

        buffer.seek(0).unwrap();
        for &(n, expected) in &fields {
            prop_assert_eq!(buffer.read_bits(n).unwrap(), expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_little_endian_whole_byte_roundtrip(
        bytes in 2u32..=4,
        value in any::<u32>(),
        prefix in 0u32..8
    ) {
        let n = bytes * 8;
        let value = if n == 32 { value } else { value & ((1 << n) - 1) };

        let mut buffer = BitBuffer::with_endianness(Endianness::Little);
        if prefix > 0 {
            buffer.write_bits(0, prefix).unwrap();
        }
        buffer.write_bits(value, n).unwrap();

        buffer.seek(0).unwrap();
        if prefix > 0 {
            buffer.read_bits(prefix).unwrap();
        }
        prop_assert_eq!(buffer.read_bits(n).unwrap(), value);
    }
}

proptest! {
    #[test]
    fn prop_little_endian_reads_as_swapped_big_endian(value in any::<u16>()) {
        let mut buffer = BitBuffer::with_endianness(Endianness::Little);
        buffer.write_bits(value as u32, 16).unwrap();

        buffer.set_endianness(Endianness::Big);
        buffer.seek(0).unwrap();
        prop_assert_eq!(buffer.read_bits(16).unwrap(), value.swap_bytes() as u32);
    }
}

proptest! {
    #[test]
    fn prop_signed_roundtrip(n in 1u32..=32, seed in any::<i32>()) {
        let value = if n == 32 {
            seed
        } else {
            let half = 1i64 << (n - 1);
            ((seed as i64).rem_euclid(2 * half) - half) as i32
        };

        let mut buffer = BitBuffer::new();
        buffer.write_int(value, n).unwrap();
        buffer.seek(0).unwrap();
        prop_assert_eq!(buffer.read_int(n).unwrap(), value);
    }
}

//
// -----------------------------------------------------------------------------
// Cursor bookkeeping
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_peek_does_not_interfere(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        skip in 0usize..512,
        n in 1u32..=32
    ) {
        let mut buffer = BitBuffer::from_bytes(bytes.clone());
        consume_bits(&mut buffer, skip % (bytes.len() * 8));

        let before = buffer.cursor();
        let peeked = buffer.peek_bits(n);
        prop_assert_eq!(buffer.cursor(), before);

        let read = buffer.read_bits(n);
        prop_assert_eq!(peeked, read);
    }
}

proptest! {
    #[test]
    fn prop_peek_bytes_does_not_interfere(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        skip in 0usize..512,
        count in 0usize..16
    ) {
        let mut buffer = BitBuffer::from_bytes(bytes.clone());
        consume_bits(&mut buffer, skip % (bytes.len() * 8));

        let before = buffer.cursor();
        let peeked = buffer.peek_bytes(count);
        prop_assert_eq!(buffer.cursor(), before);
        prop_assert_eq!(peeked, buffer.read_bytes(count));
    }
}

proptest! {
    #[test]
    fn prop_mark_reset_restores_position(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        skip in 0usize..512,
        ops in prop::collection::vec((any::<bool>(), 1u32..=32, any::<u32>()), 0..20)
    ) {
        let mut buffer = BitBuffer::from_bytes(bytes.clone());
        consume_bits(&mut buffer, skip % (bytes.len() * 8));

        let before = buffer.cursor();
        buffer.mark("checkpoint");

        for (write, n, value) in ops {
            if write {
                buffer.write_bits(value, n).unwrap();
            } else {
                let _ = buffer.read_bits(n);
            }
        }

        buffer.reset("checkpoint").unwrap();
        prop_assert_eq!(buffer.cursor(), before);
        prop_assert_eq!(buffer.position(), before.position);
    }
}

proptest! {
    #[test]
    fn prop_complete_only_after_last_byte(bytes in prop::collection::vec(any::<u8>(), 1..100)) {
        let mut buffer = BitBuffer::from_bytes(bytes.clone());

        for &expected in &bytes {
            prop_assert!(!buffer.is_complete());
            prop_assert_eq!(buffer.read_bits(8).unwrap(), expected as u32);
        }
        prop_assert!(buffer.is_complete());
        prop_assert!(buffer.read_bits(1).is_err());
    }
}

proptest! {
    #[test]
    fn prop_pending_bits_stay_below_eight(widths in prop::collection::vec(1u32..=32, 1..50)) {
        let mut buffer = BitBuffer::new();
        for n in widths {
            buffer.write_bits(u32::MAX, n).unwrap();
            prop_assert!(buffer.cursor().pending_bits < 8);
        }
        buffer.align_to_byte();
        prop_assert_eq!(buffer.cursor().pending_bits, 0);
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_widths_rejected(n in 33u32..1000) {
        let mut buffer = BitBuffer::from_bytes(vec![0u8; 16]);
        prop_assert!(buffer.read_bits(n).is_err());
        prop_assert!(buffer.write_bits(0, n).is_err());
        prop_assert!(buffer.peek_bits(n).is_err());
        prop_assert_eq!(buffer.position(), 0);
    }
}
