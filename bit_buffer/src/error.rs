#[cfg(not(feature = "std"))]
use alloc::string::String;

use raw_bytes::StorageError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBufferError {
    #[cfg_attr(
        feature = "std",
        error("Bit count must be in the range 1..=32, got {0}")
    )]
    InvalidBitCount(u32),

    #[cfg_attr(
        feature = "std",
        error("Cannot move {offset} bytes from position {position}: target is negative")
    )]
    NegativeSeek { position: usize, offset: isize },

    #[cfg_attr(
        feature = "std",
        error("Buffer underrun: {requested} bits requested, {available} available")
    )]
    BufferUnderrun { requested: usize, available: usize },

    #[cfg_attr(feature = "std", error("No mark named '{0}'"))]
    MarkNotFound(String),

    #[cfg_attr(
        feature = "std",
        error("Unknown byte order '{0}', expected 'big' or 'little'")
    )]
    UnknownEndianness(String),

    #[cfg_attr(feature = "std", error("Unknown text encoding '{0}'"))]
    UnknownEncoding(String),

    #[cfg_attr(feature = "std", error("Invalid {encoding} text: {reason}"))]
    InvalidText {
        encoding: &'static str,
        reason: &'static str,
    },

    #[cfg_attr(feature = "std", error("storage error: {0}"))]
    Storage(#[cfg_attr(feature = "std", from)] StorageError),
}

pub type Result<T> = core::result::Result<T, BitBufferError>;

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitBufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBufferError::InvalidBitCount(n) => {
                write!(f, "Bit count must be in the range 1..=32, got {}", n)
            }
            BitBufferError::NegativeSeek { position, offset } => write!(
                f,
                "Cannot move {} bytes from position {}: target is negative",
                offset, position
            ),
            BitBufferError::BufferUnderrun {
                requested,
                available,
            } => write!(
                f,
                "Buffer underrun: {} bits requested, {} available",
                requested, available
            ),
            BitBufferError::MarkNotFound(name) => write!(f, "No mark named '{}'", name),
            BitBufferError::UnknownEndianness(s) => {
                write!(f, "Unknown byte order '{}', expected 'big' or 'little'", s)
            }
            BitBufferError::UnknownEncoding(s) => write!(f, "Unknown text encoding '{}'", s),
            BitBufferError::InvalidText { encoding, reason } => {
                write!(f, "Invalid {} text: {}", encoding, reason)
            }
            BitBufferError::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<StorageError> for BitBufferError {
    fn from(err: StorageError) -> Self {
        BitBufferError::Storage(err)
    }
}
