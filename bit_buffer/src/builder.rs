//! Construction-time configuration for [`BitBuffer`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use raw_bytes::Storage;

use crate::{BitBuffer, Endianness, Result};

/// Builder for a [`BitBuffer`] with a fluent API
///
/// ```
/// use bit_buffer::{BitBuffer, Endianness};
///
/// let buffer = BitBuffer::builder()
///     .bytes([0x12, 0x34])
///     .byte_order("little")
///     .unwrap()
///     .build();
/// assert_eq!(buffer.endianness(), Endianness::Little);
/// assert_eq!(buffer.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitBufferBuilder {
    bytes: Vec<u8>,
    endianness: Endianness,
    capacity: usize,
}

impl BitBufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial content. The cursor starts at its first byte.
    pub fn bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bytes = bytes.into();
        self
    }

    pub fn endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Sets the byte order from its name, `"big"` or `"little"`.
    pub fn byte_order(self, name: &str) -> Result<Self> {
        Ok(self.endianness(name.parse()?))
    }

    /// Reserves room for `capacity` bytes in total without changing the
    /// buffer's length.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> BitBuffer {
        let mut bytes = self.bytes;
        bytes.reserve(self.capacity.saturating_sub(bytes.len()));
        BitBuffer::from_parts(Storage::from_vec(bytes), self.endianness)
    }
}
