use crate::{BitBufferError, Result};

/// Largest number of bits a single read or write can move.
pub const MAX_BITS: u32 = u32::BITS;

/// Checks that `bit_count` is in `1..=32`.
#[inline]
pub fn validate_bit_count(bit_count: u32) -> Result<u32> {
    if (1..=MAX_BITS).contains(&bit_count) {
        Ok(bit_count)
    } else {
        Err(BitBufferError::InvalidBitCount(bit_count))
    }
}

/// A mask with the low `bits` bits set.
#[inline(always)]
pub const fn mask(bits: u32) -> u32 {
    if bits >= MAX_BITS {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Number of bytes needed to hold `bit_count` bits.
#[inline(always)]
pub const fn byte_span(bit_count: u32) -> u32 {
    bit_count.div_ceil(8)
}

/// Reverses the order of the low `span` bytes of `value`.
///
/// Bytes above the span are dropped. Applying the transform twice with
/// the same span is the identity on values that fit in the span.
pub const fn swap_span(value: u32, span: u32) -> u32 {
    match span {
        2 => ((value & 0xFF) << 8) | ((value >> 8) & 0xFF),
        3 => ((value & 0xFF) << 16) | (value & 0xFF00) | ((value >> 16) & 0xFF),
        4 => value.swap_bytes(),
        _ => value,
    }
}
