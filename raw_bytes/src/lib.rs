//! # raw_bytes
//!
//! Zero-filled byte storage with a single, monotonic growth policy.
//!
//! ```rust
//! use raw_bytes::Storage;
//!
//! let mut storage = Storage::from_slice(&[1, 2, 3]);
//! storage.grow_to(4);
//!
//! // Doubling, bounded below by the requested length.
//! assert_eq!(storage.len(), 6);
//! assert_eq!(storage.as_slice(), &[1, 2, 3, 0, 0, 0]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod storage;

pub use error::StorageError;
pub use storage::{Storage, grown_len};
