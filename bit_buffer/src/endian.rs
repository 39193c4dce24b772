//! Byte order selection for multi-byte bit fields.

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::BitBufferError;
use crate::bit_ops::{byte_span, swap_span};

/// Which way the bytes of a field wider than 8 bits are laid out.
///
/// Bits are always packed most significant first; endianness only
/// decides which 8-bit group of the value lands in which stream byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
    #[default]
    Big,
    Little,
}

impl Endianness {
    pub const fn is_big(self) -> bool {
        matches!(self, Endianness::Big)
    }

    /// Converts between the stored and the logical form of a `bit_count`
    /// wide field. The conversion is its own inverse.
    #[inline]
    pub const fn order(self, value: u32, bit_count: u32) -> u32 {
        match self {
            Endianness::Little if bit_count > 8 => swap_span(value, byte_span(bit_count)),
            _ => value,
        }
    }
}

impl FromStr for Endianness {
    type Err = BitBufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "big" => Ok(Endianness::Big),
            "little" => Ok(Endianness::Little),
            other => Err(BitBufferError::UnknownEndianness(other.to_string())),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
        })
    }
}
