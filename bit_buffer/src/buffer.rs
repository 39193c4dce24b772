//! The bit-level read/write engine.
//!
//! # Examples
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let mut buffer = BitBuffer::new();
//! buffer.write_bits(0xF, 4).unwrap();
//! buffer.write_bits(0x3, 2).unwrap();
//! assert_eq!(buffer.buffer(), &[0b1111_1100]);
//!
//! buffer.seek(0).unwrap();
//! assert_eq!(buffer.read_bits(4).unwrap(), 0xF);
//! assert_eq!(buffer.read_bits(2).unwrap(), 0x3);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use raw_bytes::Storage;

use crate::bit_ops::{self, mask};
use crate::marks::{Cursor, MarkKey};
use crate::{BitBufferBuilder, BitBufferError, Endianness, Result};

/// A growable byte sequence read and written in fields of 1 to 32 bits.
///
/// The buffer keeps a single cursor shared by reads and writes. A byte is
/// opened when its first bit is touched: `position` moves past it and the
/// remaining bits are tracked in the cursor until the byte is used up or
/// the buffer is aligned. Written bits go straight into storage, so a
/// partially written byte is always part of the data.
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    data: Storage,
    pub(crate) cursor: Cursor,
    endianness: Endianness,
    pub(crate) marks: BTreeMap<MarkKey, Cursor>,
}

impl BitBuffer {
    /// Creates an empty big-endian buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with the given byte order.
    pub fn with_endianness(endianness: Endianness) -> Self {
        Self {
            endianness,
            ..Self::default()
        }
    }

    /// Creates a big-endian buffer over existing bytes, positioned at the start.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut buffer = BitBuffer::from_bytes(vec![0xFF, 0x00]);
    /// assert_eq!(buffer.read_bits(12).unwrap(), 0xFF0);
    /// ```
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_parts(Storage::from_vec(bytes.into()), Endianness::Big)
    }

    pub fn builder() -> BitBufferBuilder {
        BitBufferBuilder::new()
    }

    pub(crate) fn from_parts(data: Storage, endianness: Endianness) -> Self {
        Self {
            data,
            cursor: Cursor::default(),
            endianness,
            marks: BTreeMap::new(),
        }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Changes the byte order for subsequent operations only.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Index of the next whole byte to be consumed or produced.
    pub fn position(&self) -> usize {
        self.cursor.position
    }

    /// Snapshot of the full cursor state.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of addressable bytes, including growth headroom.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bits that can still be read before running out of data.
    pub fn remaining_bits(&self) -> usize {
        self.data.len().saturating_sub(self.cursor.position) * 8
            + self.cursor.pending_bits as usize
    }

    pub fn is_aligned(&self) -> bool {
        self.cursor.pending_bits == 0
    }

    /// Reads `bit_count` bits (1..=32) as an unsigned integer.
    ///
    /// Bits are assembled most significant first. For fields wider than a
    /// byte in a little-endian buffer, the assembled bytes are reversed.
    ///
    /// On failure the cursor is left untouched.
    ///
    /// ```
    /// use bit_buffer::{BitBuffer, Endianness};
    ///
    /// let mut buffer = BitBuffer::builder()
    ///     .bytes([0xFF, 0x00])
    ///     .endianness(Endianness::Little)
    ///     .build();
    /// assert_eq!(buffer.read_bits(12).unwrap(), 0xF00F);
    /// ```
    pub fn read_bits(&mut self, bit_count: u32) -> Result<u32> {
        let bit_count = bit_ops::validate_bit_count(bit_count)?;
        self.ensure_readable(bit_count as usize)?;

        let mut value = 0u32;
        let mut remaining = bit_count;
        while remaining > 0 {
            if self.cursor.pending_bits == 0 {
                self.open_read_byte()?;
            }

            let pending = self.cursor.pending_bits as u32;
            let take = remaining.min(pending);
            let bits = (self.cursor.pending_byte as u32 >> (pending - take)) & mask(take);

            value = (value << take) | bits;
            self.cursor.pending_bits -= take as u8;
            remaining -= take;
        }

        Ok(self.endianness.order(value, bit_count))
    }

    /// Writes the low `bit_count` bits (1..=32) of `value`.
    ///
    /// The storage grows as needed. Writing into a byte replaces only the
    /// bits being written; a byte opened by a write starts out zeroed.
    pub fn write_bits(&mut self, value: u32, bit_count: u32) -> Result<()> {
        let bit_count = bit_ops::validate_bit_count(bit_count)?;
        let value = self.endianness.order(value, bit_count) & mask(bit_count);

        let mut remaining = bit_count;
        while remaining > 0 {
            if self.cursor.pending_bits == 0 {
                self.open_write_byte();
            }

            let pending = self.cursor.pending_bits as u32;
            let take = remaining.min(pending);
            let shift = pending - take;
            let bits = (value >> (remaining - take)) & mask(take);
            let field = (mask(take) << shift) as u8;

            self.cursor.pending_byte = (self.cursor.pending_byte & !field) | ((bits << shift) as u8);
            self.cursor.pending_bits -= take as u8;
            remaining -= take;

            self.data
                .set(self.cursor.position - 1, self.cursor.pending_byte)?;
        }

        Ok(())
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_bits(value as u32, 1)
    }

    /// Moves to the next byte boundary.
    ///
    /// The unread or unwritten bits of the current byte are skipped. A
    /// partially written byte is already stored, zero-padded, so nothing
    /// is lost and no extra byte is appended.
    pub fn align_to_byte(&mut self) {
        self.cursor.pending_bits = 0;
        self.cursor.pending_byte = 0;
    }

    /// Aligns, then moves to byte `position`, growing the storage if the
    /// target lies past the end.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        self.align_to_byte();
        self.data.grow_to(position);
        self.cursor.position = position;
        Ok(())
    }

    /// Seeks `offset` bytes relative to the current position.
    pub fn skip(&mut self, offset: isize) -> Result<()> {
        let position = self.cursor.position;
        let target = position
            .checked_add_signed(offset)
            .ok_or(BitBufferError::NegativeSeek { position, offset })?;
        self.seek(target)
    }

    /// Whether every byte has been consumed and no partial byte is pending.
    pub fn is_complete(&self) -> bool {
        self.cursor.pending_bits == 0 && self.cursor.position >= self.data.len()
    }

    /// Aligns and returns the logical content: every byte before `position`.
    ///
    /// Growth headroom past the cursor is not included.
    pub fn buffer(&mut self) -> &[u8] {
        self.align_to_byte();
        self.data.prefix(self.cursor.position)
    }

    /// Consumes the buffer, returning the same bytes as [`BitBuffer::buffer`].
    pub fn into_bytes(self) -> Vec<u8> {
        let end = self.cursor.position;
        let mut bytes = self.data.into_vec();
        bytes.truncate(end);
        bytes
    }

    /// Discards all bytes, the cursor and every mark.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing bit buffer ({} bytes, {} marks)",
            self.data.len(),
            self.marks.len()
        );
        self.data.clear();
        self.cursor = Cursor::default();
        self.marks.clear();
    }

    pub(crate) fn data(&self) -> &Storage {
        &self.data
    }

    pub(crate) fn ensure_readable(&self, bits: usize) -> Result<()> {
        let available = self.remaining_bits();
        if bits > available {
            Err(BitBufferError::BufferUnderrun {
                requested: bits,
                available,
            })
        } else {
            Ok(())
        }
    }

    fn open_read_byte(&mut self) -> Result<()> {
        let position = self.cursor.position;
        let byte = self.data.get(position).map_err(|_| BitBufferError::BufferUnderrun {
            requested: 8,
            available: 0,
        })?;

        self.cursor = Cursor {
            position: position + 1,
            pending_bits: 8,
            pending_byte: byte,
        };
        Ok(())
    }

    fn open_write_byte(&mut self) {
        let position = self.cursor.position;
        self.data.grow_to(position + 1);

        self.cursor = Cursor {
            position: position + 1,
            pending_bits: 8,
            pending_byte: 0,
        };
    }
}

impl From<Vec<u8>> for BitBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for BitBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_parts(Storage::from_slice(bytes), Endianness::Big)
    }
}
