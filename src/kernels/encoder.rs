//! This module contains the pure, stateless kernel that packs a byte stream
//! into base32k code points.
//!
//! Bits are read least-significant-bit first within a byte and in ascending
//! byte order across the buffer. Every 15 bits become one symbol, which is
//! lane-tagged into a CJK or Hangul code point (see `lanes`). A final symbol
//! holding fewer than 15 genuine bits is followed by a one-byte ASCII padding
//! marker announcing how many of its bits are real.

use super::lanes::{padding_marker, tag_symbol, BITS_PER_BYTE, BITS_PER_SYMBOL};
use super::length::encoded_length;

/// UTF-8 width of every data code point.
const UTF8_BYTES_PER_SYMBOL: usize = 3;

//==================================================================================
// 1. Bit Cursor
//==================================================================================

/// Position of the next unread bit: `index` is the byte, `bit` the offset
/// inside it (always `< 8`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BitCursor {
    index: usize,
    bit: u32,
}

impl BitCursor {
    /// True while a full 15-bit symbol is available ahead of the cursor.
    /// Two bytes suffice when at most one bit of the first is already consumed.
    fn has_full_symbol(&self, len: usize) -> bool {
        self.index + 2 < len || (self.index + 2 == len && self.bit <= 1)
    }

    /// Moves the cursor forward by one symbol width.
    fn advance(&mut self) {
        self.index += if self.bit != 0 { 2 } else { 1 };
        self.bit = (self.bit + BITS_PER_SYMBOL) % BITS_PER_BYTE;
    }
}

/// Reads a full 15-bit symbol at the cursor. The caller has checked
/// `has_full_symbol`.
fn read_symbol(src: &[u8], cursor: BitCursor) -> u16 {
    let BitCursor { index, bit } = cursor;
    let mut value = u16::from(src[index]) >> bit;
    value |= u16::from(src[index + 1]) << (BITS_PER_BYTE - bit);
    if bit > 1 {
        // More than one bit of the first byte is gone, the tail spills into a third.
        value |= u16::from(src[index + 2]) << (2 * BITS_PER_BYTE - bit);
    }
    value & 0x7fff
}

/// Reads whatever is left after the last full symbol. Returns the zero-extended
/// symbol and its count of genuine bits, or `None` when nothing remains.
fn read_last_symbol(src: &[u8], cursor: BitCursor) -> Option<(u16, u32)> {
    let BitCursor { index, bit } = cursor;
    match src.len() - index {
        2 => {
            let value = (u16::from(src[index]) >> bit)
                | (u16::from(src[index + 1]) << (BITS_PER_BYTE - bit));
            Some((value, 2 * BITS_PER_BYTE - bit))
        }
        1 => Some((u16::from(src[index]) >> bit, BITS_PER_BYTE - bit)),
        _ => None,
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Encodes a byte buffer into base32k text. Never fails; empty input yields an
/// empty string.
pub fn encode_to_string(src: &[u8]) -> String {
    let mut out = String::new();
    if src.is_empty() {
        return out;
    }
    out.reserve(encoded_length(src.len()) * UTF8_BYTES_PER_SYMBOL);

    let mut cursor = BitCursor::default();
    while cursor.has_full_symbol(src.len()) {
        out.push(tag_symbol(read_symbol(src, cursor)));
        cursor.advance();
    }

    if let Some((value, valid_bits)) = read_last_symbol(src, cursor) {
        out.push(tag_symbol(value));
        if valid_bits < BITS_PER_SYMBOL {
            out.push(padding_marker(valid_bits));
        }
    }

    log_metric!(
        "event" = "encode",
        "input_bytes" = src.len(),
        "output_bytes" = out.len()
    );
    out
}

/// Encodes a byte buffer into the UTF-8 bytes of its base32k text.
pub fn encode(src: &[u8]) -> Vec<u8> {
    encode_to_string(src).into_bytes()
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
