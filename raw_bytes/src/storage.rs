#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::StorageError;

/// Computes the length storage grows to when `required` bytes are needed.
///
/// The current length is doubled, bounded below by `required`, so repeated
/// appends cost amortized O(1) and a single large request is served exactly.
#[inline]
pub const fn grown_len(current: usize, required: usize) -> usize {
    let doubled = current.saturating_mul(2);
    if doubled > required { doubled } else { required }
}

/// The low-level byte store behind a bit buffer.
///
/// Every byte up to [`Storage::len`] is initialized; bytes added by growth
/// are zero. The length only changes through [`Storage::grow_to`] and
/// [`Storage::clear`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Storage {
    bytes: Vec<u8>,
}

impl Storage {
    /// Create empty storage
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create empty storage with room for `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Return byte count
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the first `end` bytes, or everything if `end` is past the end.
    pub fn prefix(&self, end: usize) -> &[u8] {
        &self.bytes[..end.min(self.bytes.len())]
    }

    /// Read byte i
    pub fn get(&self, index: usize) -> Result<u8, StorageError> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(StorageError::OutOfBounds {
                index,
                len: self.bytes.len(),
            })
    }

    /// Overwrite byte i
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), StorageError> {
        let len = self.bytes.len();
        match self.bytes.get_mut(index) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(StorageError::OutOfBounds { index, len }),
        }
    }

    /// Makes sure at least `required` bytes are addressable.
    ///
    /// Returns `true` if the storage had to grow. Existing bytes are never
    /// touched and the storage never shrinks.
    pub fn grow_to(&mut self, required: usize) -> bool {
        let current = self.bytes.len();
        if required <= current {
            return false;
        }

        let new_len = grown_len(current, required);
        log::trace!("growing storage from {current} to {new_len} bytes (required {required})");
        self.bytes.resize(new_len, 0);
        true
    }

    /// Discards all bytes.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl From<Vec<u8>> for Storage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for Storage {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}
