#[cfg(feature = "std")]
use thiserror::Error;

/// Storage errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Out-of-bounds access
    #[cfg_attr(feature = "std", error("Index {index} out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::OutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
        }
    }
}
