//! Byte, integer and string helpers layered on the bit engine.
//!
//! Byte and string operations first move forward to a byte boundary,
//! dropping whatever is left of a partially read or written byte.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::codec::{Encoding, TextCodec};
use crate::{BitBuffer, BitBufferError, Cursor, Result};

impl BitBuffer {
    /// Aligns and reads `count` whole bytes.
    ///
    /// Fails without moving the cursor if fewer than `count` bytes follow
    /// the current byte boundary.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let available = self.data().len().saturating_sub(self.cursor.position);
        if count > available {
            return Err(BitBufferError::BufferUnderrun {
                requested: count.saturating_mul(8),
                available: available * 8,
            });
        }

        self.align_to_byte();
        let mut bytes = Vec::with_capacity(count);
        for _ in 0..count {
            bytes.push(self.read_bits(8)? as u8);
        }
        Ok(bytes)
    }

    /// Aligns and writes every byte of `bytes`.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.align_to_byte();
        for &byte in bytes {
            self.write_bits(byte as u32, 8)?;
        }
        Ok(())
    }

    #[inline]
    pub fn read_uint(&mut self, bit_count: u32) -> Result<u32> {
        self.read_bits(bit_count)
    }

    #[inline]
    pub fn write_uint(&mut self, value: u32, bit_count: u32) -> Result<()> {
        self.write_bits(value, bit_count)
    }

    /// Reads a `bit_count` wide two's complement integer.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut buffer = BitBuffer::from_bytes(vec![0b1110_1000]);
    /// assert_eq!(buffer.read_int(5).unwrap(), -3);
    /// ```
    pub fn read_int(&mut self, bit_count: u32) -> Result<i32> {
        let raw = self.read_bits(bit_count)? as i64;
        let value = if raw & (1 << (bit_count - 1)) != 0 {
            raw - (1i64 << bit_count)
        } else {
            raw
        };
        Ok(value as i32)
    }

    /// Writes `value` as a `bit_count` wide two's complement integer.
    ///
    /// Values outside the representable range are truncated to the low
    /// `bit_count` bits.
    pub fn write_int(&mut self, value: i32, bit_count: u32) -> Result<()> {
        let bit_count = crate::bit_ops::validate_bit_count(bit_count)?;
        let raw = if value < 0 {
            (value as i64 + (1i64 << bit_count)) as u32
        } else {
            value as u32
        };
        self.write_bits(raw, bit_count)
    }

    /// Reads `len` bytes of UTF-8 text.
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        self.read_string_with(len, &Encoding::Utf8)
    }

    /// Reads `len` bytes and decodes them with `codec`.
    ///
    /// If decoding fails the cursor is put back where it was.
    pub fn read_string_with<C>(&mut self, len: usize, codec: &C) -> Result<String>
    where
        C: TextCodec + ?Sized,
    {
        let start = self.cursor;
        let bytes = self.read_bytes(len)?;
        self.decode_or_rewind(&bytes, codec, start)
    }

    pub fn write_string(&mut self, text: &str) -> Result<()> {
        self.write_string_with(text, &Encoding::Utf8)
    }

    /// Encodes `text` with `codec` and writes the bytes, without a terminator.
    pub fn write_string_with<C>(&mut self, text: &str, codec: &C) -> Result<()>
    where
        C: TextCodec + ?Sized,
    {
        let bytes = codec.encode(text)?;
        self.write_bytes(&bytes)
    }

    /// Reads UTF-8 text up to and including a zero byte.
    pub fn read_c_string(&mut self) -> Result<String> {
        self.read_c_string_with(&Encoding::Utf8)
    }

    /// Reads bytes up to a zero byte and decodes them with `codec`.
    ///
    /// The terminator is consumed but not part of the result. A missing
    /// terminator is reported as an underrun and nothing is consumed.
    pub fn read_c_string_with<C>(&mut self, codec: &C) -> Result<String>
    where
        C: TextCodec + ?Sized,
    {
        let tail = self
            .data()
            .as_slice()
            .get(self.cursor.position..)
            .unwrap_or_default();
        let len = tail.iter().position(|&b| b == 0).ok_or(
            BitBufferError::BufferUnderrun {
                requested: (tail.len() + 1) * 8,
                available: tail.len() * 8,
            },
        )?;

        let start = self.cursor;
        let bytes = self.read_bytes(len)?;
        self.read_bits(8)?;
        self.decode_or_rewind(&bytes, codec, start)
    }

    pub fn write_c_string(&mut self, text: &str) -> Result<()> {
        self.write_c_string_with(text, &Encoding::Utf8)
    }

    /// Writes `text` encoded with `codec`, followed by a zero byte.
    pub fn write_c_string_with<C>(&mut self, text: &str, codec: &C) -> Result<()>
    where
        C: TextCodec + ?Sized,
    {
        let bytes = codec.encode(text)?;
        self.write_bytes(&bytes)?;
        self.write_bits(0, 8)
    }

    fn decode_or_rewind<C>(
        &mut self,
        bytes: &[u8],
        codec: &C,
        start: Cursor,
    ) -> Result<String>
    where
        C: TextCodec + ?Sized,
    {
        match codec.decode(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                self.cursor = start;
                Err(e)
            }
        }
    }
}
