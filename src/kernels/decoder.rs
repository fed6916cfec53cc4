//! This module contains the pure, stateless kernel that unpacks base32k text
//! back into the original bytes.
//!
//! It is the exact inverse of `encoder`: every data code point contributes
//! 15 bits, written out LSB-first. A trailing padding marker tells how many
//! bits of the last symbol were genuine; when 8 or more were zero-fill, the
//! speculatively written spill-over byte is dropped again.

use std::borrow::Cow;

use super::lanes::{lane_of, marker_valid_bits, untag, Lane, BITS_PER_BYTE, BITS_PER_SYMBOL};
use super::length::decoded_length;
use crate::error::Base32kError;

//==================================================================================
// 1. Bit Writer
//==================================================================================

/// Accumulates 15-bit symbols into whole bytes. Bits that do not yet fill a
/// byte wait in `remainder`, `bit` counts them.
struct BitWriter {
    out: Vec<u8>,
    remainder: u8,
    bit: u32,
}

impl BitWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            remainder: 0,
            bit: 0,
        }
    }

    /// Appends one symbol, emitting one byte when the writer is byte-aligned
    /// and two otherwise.
    fn push_symbol(&mut self, value: u16) {
        self.out.push((value << self.bit) as u8 | self.remainder);
        if self.bit != 0 {
            self.out.push((value >> (BITS_PER_BYTE - self.bit)) as u8);
            self.remainder = (value >> (2 * BITS_PER_BYTE - self.bit)) as u8;
        } else {
            self.remainder = (value >> BITS_PER_BYTE) as u8;
        }
        self.bit = (self.bit + BITS_PER_SYMBOL) % BITS_PER_BYTE;
    }

    /// Drops the zero-fill byte written for the final symbol.
    fn trim_spill_byte(&mut self) {
        self.out.pop();
    }

    fn finish(self) -> Vec<u8> {
        self.out
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Decodes base32k text back into bytes.
pub fn decode_str(src: &str) -> Result<Vec<u8>, Base32kError> {
    if src.is_empty() {
        return Ok(Vec::new());
    }
    let trailing = src.as_bytes()[src.len() - 1];
    let total = src.chars().count();
    let mut writer = BitWriter::with_capacity(decoded_length(total, trailing));

    for (position, codepoint) in src.chars().enumerate() {
        match lane_of(codepoint) {
            Lane::Data(top_bits) => writer.push_symbol(untag(codepoint, top_bits)),
            Lane::Padding => {
                let valid_bits = marker_valid_bits(u32::from(codepoint))
                    .filter(|_| position + 1 == total && position > 0)
                    .ok_or(Base32kError::InvalidPadding { position, codepoint })?;
                let deficit = BITS_PER_SYMBOL - valid_bits;
                if deficit >= BITS_PER_BYTE {
                    writer.trim_spill_byte();
                }
                break;
            }
            Lane::Invalid => return Err(Base32kError::InvalidLane { position, codepoint }),
        }
    }

    let out = writer.finish();
    log_metric!(
        "event" = "decode",
        "input_codepoints" = total,
        "output_bytes" = out.len()
    );
    Ok(out)
}

/// Decodes the UTF-8 bytes of base32k text. Malformed UTF-8 sequences become
/// U+FFFD, which has no lane and is reported as `InvalidLane`.
pub fn decode(src: &[u8]) -> Result<Vec<u8>, Base32kError> {
    let text: Cow<'_, str> = String::from_utf8_lossy(src);
    decode_str(&text)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
