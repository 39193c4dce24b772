//! Named save points and non-consuming reads.
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let mut buffer = BitBuffer::from_bytes(vec![0xA5, 0x5A]);
//! buffer.mark("header");
//! assert_eq!(buffer.read_bits(8).unwrap(), 0xA5);
//!
//! buffer.reset("header").unwrap();
//! assert_eq!(buffer.peek_bits(4).unwrap(), 0xA);
//! assert_eq!(buffer.position(), 0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::{BitBuffer, BitBufferError, Result};

/// Name used by [`BitBuffer::mark_default`] and [`BitBuffer::reset_default`].
pub const DEFAULT_MARK: &str = "default";

/// The cursor state saved by a mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Index of the next whole byte.
    pub position: usize,
    /// Bits of the current byte not yet read or written, always below 8.
    pub pending_bits: u8,
    /// The byte currently being read or written.
    pub pending_byte: u8,
}

/// Keys of the mark table. `Peek` can never be produced from a caller's name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum MarkKey {
    Named(String),
    Peek,
}

impl BitBuffer {
    /// Saves the cursor under `name`, replacing any earlier mark of that name.
    pub fn mark(&mut self, name: &str) {
        log::trace!("mark '{name}' at {:?}", self.cursor);
        self.marks.insert(MarkKey::Named(name.into()), self.cursor);
    }

    pub fn mark_default(&mut self) {
        self.mark(DEFAULT_MARK);
    }

    /// Aligns, then restores the cursor saved under `name`.
    ///
    /// The mark stays in place, so resetting to it again returns to the
    /// same spot. An unknown name leaves the cursor as it was.
    pub fn reset(&mut self, name: &str) -> Result<()> {
        let saved = self
            .marks
            .get(&MarkKey::Named(name.into()))
            .copied()
            .ok_or_else(|| BitBufferError::MarkNotFound(name.into()))?;

        log::trace!("reset to '{name}' at {saved:?}");
        self.align_to_byte();
        self.cursor = saved;
        Ok(())
    }

    pub fn reset_default(&mut self) -> Result<()> {
        self.reset(DEFAULT_MARK)
    }

    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains_key(&MarkKey::Named(name.into()))
    }

    /// Runs `read` and rewinds to where it started, whether it succeeded
    /// or not.
    fn peek_with<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.marks.insert(MarkKey::Peek, self.cursor);
        let result = read(self);

        if let Some(saved) = self.marks.remove(&MarkKey::Peek) {
            self.cursor = saved;
        }
        result
    }

    /// Reads `bit_count` bits without moving the cursor.
    pub fn peek_bits(&mut self, bit_count: u32) -> Result<u32> {
        self.peek_with(|buffer| buffer.read_bits(bit_count))
    }

    pub fn peek_bool(&mut self) -> Result<bool> {
        self.peek_with(Self::read_bool)
    }

    pub fn peek_uint(&mut self, bit_count: u32) -> Result<u32> {
        self.peek_bits(bit_count)
    }

    pub fn peek_int(&mut self, bit_count: u32) -> Result<i32> {
        self.peek_with(|buffer| buffer.read_int(bit_count))
    }

    /// Reads `count` whole bytes without moving the cursor.
    pub fn peek_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.peek_with(|buffer| buffer.read_bytes(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_exact_cursor() -> Result<()> {
        let mut buffer = BitBuffer::from_bytes(vec![0b1011_0011, 0xFF, 0x00]);
        buffer.read_bits(3)?;
        let before = buffer.cursor();
        buffer.mark("here");

        buffer.read_bits(10)?;
        buffer.write_bits(0, 4)?;
        buffer.reset("here")?;

        assert_eq!(buffer.cursor(), before);
        assert_eq!(buffer.read_bits(5)?, 0b10011);
        Ok(())
    }

    #[test]
    fn reset_is_idempotent() -> Result<()> {
        let mut buffer = BitBuffer::from_bytes(vec![1, 2, 3, 4]);
        buffer.read_bits(8)?;
        buffer.mark("one");
        buffer.read_bits(8)?;
        buffer.mark("two");
        buffer.read_bits(8)?;

        buffer.reset("one")?;
        buffer.reset("one")?;
        assert_eq!(buffer.position(), 1);
        assert!(buffer.has_mark("two"));

        buffer.reset("two")?;
        assert_eq!(buffer.read_bits(8)?, 3);
        Ok(())
    }

    #[test]
    fn later_mark_with_same_name_wins() -> Result<()> {
        let mut buffer = BitBuffer::from_bytes(vec![1, 2, 3]);
        buffer.mark_default();
        buffer.read_bits(16)?;
        buffer.mark_default();
        buffer.seek(0)?;

        buffer.reset_default()?;
        assert_eq!(buffer.position(), 2);
        Ok(())
    }

    #[test]
    fn unknown_mark_fails() {
        let mut buffer = BitBuffer::from_bytes(vec![0xF0]);
        buffer.read_bits(2).unwrap();
        let before = buffer.cursor();

        assert_eq!(
            buffer.reset("missing"),
            Err(BitBufferError::MarkNotFound("missing".into()))
        );
        assert!(matches!(
            buffer.reset_default(),
            Err(BitBufferError::MarkNotFound(_))
        ));
        assert_eq!(buffer.cursor(), before);
    }

    #[test]
    fn peek_does_not_move_cursor() -> Result<()> {
        let mut buffer = BitBuffer::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]);
        buffer.read_bits(4)?;
        let before = buffer.cursor();

        assert_eq!(buffer.peek_bits(12)?, 0xEAD);
        assert_eq!(buffer.cursor(), before);
        assert_eq!(buffer.peek_bytes(2)?, vec![0xAD, 0xBE]);
        assert_eq!(buffer.cursor(), before);

        assert_eq!(buffer.read_bits(12)?, 0xEAD);
        Ok(())
    }

    #[test]
    fn failed_peek_still_rewinds() -> Result<()> {
        let mut buffer = BitBuffer::from_bytes(vec![0xFF, 0xFF]);
        buffer.read_bits(6)?;
        let before = buffer.cursor();

        assert!(buffer.peek_bytes(2).is_err());
        assert_eq!(buffer.cursor(), before);
        Ok(())
    }

    #[test]
    fn peek_ignores_caller_marks() -> Result<()> {
        let mut buffer = BitBuffer::from_bytes(vec![0x12, 0x34]);
        buffer.mark("peek");
        buffer.read_bits(8)?;

        assert_eq!(buffer.peek_uint(8)?, 0x34);
        assert!(!buffer.peek_bool()?);
        assert_eq!(buffer.peek_int(4)?, 3);
        buffer.reset("peek")?;
        assert_eq!(buffer.position(), 0);
        Ok(())
    }

    #[test]
    fn peek_entry_does_not_linger() -> Result<()> {
        let mut buffer = BitBuffer::from_bytes(vec![0x12]);
        buffer.peek_bits(3)?;
        assert!(buffer.marks.is_empty());
        Ok(())
    }
}
