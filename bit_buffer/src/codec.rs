//! Text encoding boundary for the string helpers.
//!
//! The buffer itself only moves bytes. Turning those bytes into text (and
//! back) is delegated to a [`TextCodec`]; [`Encoding`] covers the common
//! named encodings and callers can plug in their own.

use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{BitBufferError, Result};

/// Converts between raw bytes and text.
pub trait TextCodec {
    fn decode(&self, bytes: &[u8]) -> Result<String>;

    fn encode(&self, text: &str) -> Result<Vec<u8>>;
}

/// Built-in named encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[default]
    Utf8,
    /// 7-bit ASCII; bytes and characters above 0x7F are rejected.
    Ascii,
    /// ISO-8859-1, one byte per code point up to U+00FF.
    Latin1,
    Utf16Le,
    /// Lowercase hexadecimal, two digits per byte.
    Hex,
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Encoding {
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin1",
            Encoding::Utf16Le => "utf16le",
            Encoding::Hex => "hex",
        }
    }

    fn invalid(self, reason: &'static str) -> BitBufferError {
        BitBufferError::InvalidText {
            encoding: self.name(),
            reason,
        }
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

impl TextCodec for Encoding {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => core::str::from_utf8(bytes)
                .map(ToString::to_string)
                .map_err(|_| self.invalid("malformed UTF-8 sequence")),
            Encoding::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| b as char).collect())
                } else {
                    Err(self.invalid("byte above 0x7F"))
                }
            }
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Encoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(self.invalid("odd number of bytes"));
                }
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .collect::<core::result::Result<String, _>>()
                    .map_err(|_| self.invalid("unpaired surrogate"))
            }
            Encoding::Hex => {
                let mut text = String::with_capacity(bytes.len() * 2);
                for &b in bytes {
                    text.push(HEX_DIGITS[(b >> 4) as usize] as char);
                    text.push(HEX_DIGITS[(b & 0xF) as usize] as char);
                }
                Ok(text)
            }
        }
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Ascii => {
                if text.is_ascii() {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(self.invalid("character outside ASCII"))
                }
            }
            Encoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(c).map_err(|_| self.invalid("character above U+00FF")))
                .collect(),
            Encoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Encoding::Hex => {
                let digits = text.as_bytes();
                if digits.len() % 2 != 0 {
                    return Err(self.invalid("odd number of digits"));
                }
                digits
                    .chunks_exact(2)
                    .map(|pair| match (hex_value(pair[0]), hex_value(pair[1])) {
                        (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                        _ => Err(self.invalid("non-hexadecimal digit")),
                    })
                    .collect()
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = BitBufferError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "utf16le" | "utf-16le" | "ucs2" => Ok(Encoding::Utf16Le),
            "hex" => Ok(Encoding::Hex),
            other => Err(BitBufferError::UnknownEncoding(other.to_string())),
        }
    }
}
