//! Text decodings tried, in order, when reading the report database.
//!
//! The database is normally UTF-8, but hand-edited or spreadsheet-exported
//! files show up in other encodings. Each entry of [`DECODE_CHAIN`] is tried
//! in turn with a strict parse; the first one that yields a well-formed table
//! wins. [`LENIENT_DECODING`] is used last, paired with a parse that tolerates
//! ragged rows.

use std::fmt;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// A single decoding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
    /// Strict UTF-8.
    Utf8,
    /// UTF-8 with an optional leading byte-order mark.
    Utf8Sig,
    /// UTF-16, endianness from the BOM, little-endian when absent.
    Utf16,
    /// ISO-8859-1; every byte maps to one code point, so this never fails.
    Latin1,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
}

/// Strict strategies in the order they are attempted.
pub const DECODE_CHAIN: [Decoding; 4] = [
    Decoding::Utf8,
    Decoding::Utf8Sig,
    Decoding::Utf16,
    Decoding::Latin1,
];

/// Decoding for the last-chance lenient parse.
pub const LENIENT_DECODING: Decoding = Decoding::Utf8Lossy;

impl Decoding {
    /// Decode raw file bytes, or `None` if they are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            Self::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(str::to_string)
            }
            Self::Utf16 => decode_utf16(bytes),
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Utf8Lossy => Some(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

impl fmt::Display for Decoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf-8"),
            Self::Utf8Sig => write!(f, "utf-8-sig"),
            Self::Utf16 => write!(f, "utf-16"),
            Self::Latin1 => write!(f, "latin-1"),
            Self::Utf8Lossy => write!(f, "utf-8 (lossy)"),
        }
    }
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (body, big_endian) = if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        (rest, false)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        (rest, true)
    } else {
        (bytes, false)
    };

    if body.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}
