//! # bit_buffer
//!
//! A `no_std` compatible bit-packed byte buffer.
//!
//! Fields of 1 to 32 bits are read and written through a single cursor,
//! most significant bit first. Fields wider than a byte follow the
//! buffer's [`Endianness`]. Named marks save and restore the cursor, and
//! `peek_*` reads leave it untouched.
//!
//! ```rust
//! use bit_buffer::{BitBuffer, Endianness};
//!
//! let mut buffer = BitBuffer::with_endianness(Endianness::Little);
//! buffer.write_bits(0b101, 3).unwrap();
//! buffer.write_bits(0x1234, 16).unwrap();
//! buffer.write_c_string("ok").unwrap();
//!
//! let bytes = buffer.buffer().to_vec();
//!
//! let mut reader = BitBuffer::builder()
//!     .bytes(bytes)
//!     .endianness(Endianness::Little)
//!     .build();
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.peek_bits(16).unwrap(), 0x1234);
//! assert_eq!(reader.read_bits(16).unwrap(), 0x1234);
//! assert_eq!(reader.read_c_string().unwrap(), "ok");
//! assert!(reader.is_complete());
//! ```
//!
//! ## Byte order
//!
//! ```rust
//! use bit_buffer::{BitBuffer, Endianness};
//!
//! let mut buffer = BitBuffer::with_endianness(Endianness::Little);
//! buffer.write_bits(0x1234, 16).unwrap();
//! assert_eq!(buffer.buffer(), &[0x34, 0x12]);
//!
//! // The same bytes read as big endian.
//! buffer.set_endianness(Endianness::Big);
//! buffer.seek(0).unwrap();
//! assert_eq!(buffer.read_bits(16).unwrap(), 0x3412);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{BitBufferError, Result};

pub mod bit_ops;

mod buffer;
pub use buffer::BitBuffer;

mod builder;
pub use builder::BitBufferBuilder;

mod bytes;

pub mod codec;
pub use codec::{Encoding, TextCodec};

pub mod endian;
pub use endian::Endianness;

mod marks;
pub use marks::{Cursor, DEFAULT_MARK};
