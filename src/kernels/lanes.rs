//! This module holds the fixed tables that embed a 15-bit symbol into a
//! 16-bit code point and recover it again.
//!
//! Valid data code points live in two blocks of the basic multilingual plane:
//!
//! ```text
//!   4000 - 9FFF  (CJK)     01xxxxxxxxxxxxxx
//!                          100xxxxxxxxxxxxx
//!   B000 - CFFF  (Hangul)  1011xxxxxxxxxxxx
//!                          1100xxxxxxxxxxxx
//! ```
//!
//! The 3 most significant bits of a symbol select one of eight 4-bit
//! prefixes. The prefix replaces those 3 bits, the low 12 bits travel
//! untouched. Seven of the eight prefixes end in the same 3 bits as the
//! symbol they tag; `0b010` is the exception and is carried as nibble `0x4`.

//==================================================================================
// 1. Constants
//==================================================================================

/// Payload bits carried by one data code point.
pub const BITS_PER_SYMBOL: u32 = 15;

/// Bits in one source byte.
pub const BITS_PER_BYTE: u32 = 8;

/// Payload bits below the lane nibble.
const LOW_BITS_MASK: u16 = 0x0fff;

/// The padding marker is `PAD_BASE + n`, where `n` is the count of genuine
/// data bits in the final symbol.
pub const PAD_BASE: u8 = b'a';

/// Top 3 symbol bits -> 16-bit code point prefix.
pub const TO_LANE: [u16; 8] = [
    /* 0b000 */ 0x8000,
    /* 0b001 */ 0x9000,
    /* 0b010 */ 0x4000, // carried as 0.100
    /* 0b011 */ 0xb000,
    /* 0b100 */ 0xc000,
    /* 0b101 */ 0x5000,
    /* 0b110 */ 0x6000,
    /* 0b111 */ 0x7000,
];

//==================================================================================
// 2. Lane Classification
//==================================================================================

/// The category a code point falls into, decided by its top nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// A data code point; the payload's top 3 bits.
    Data(u8),
    /// The ASCII-adjacent nibble `0x0` that hosts the padding marker.
    Padding,
    /// No registered lane.
    Invalid,
}

/// Top nibble of a code point -> lane.
pub const FROM_LANE: [Lane; 16] = [
    /* 0x0 */ Lane::Padding,
    /* 0x1 */ Lane::Invalid,
    /* 0x2 */ Lane::Invalid,
    /* 0x3 */ Lane::Invalid,
    /* 0x4 */ Lane::Data(0b010),
    /* 0x5 */ Lane::Data(0b101),
    /* 0x6 */ Lane::Data(0b110),
    /* 0x7 */ Lane::Data(0b111),
    /* 0x8 */ Lane::Data(0b000),
    /* 0x9 */ Lane::Data(0b001),
    /* 0xa */ Lane::Invalid,
    /* 0xb */ Lane::Data(0b011),
    /* 0xc */ Lane::Data(0b100),
    /* 0xd */ Lane::Invalid,
    /* 0xe */ Lane::Invalid,
    /* 0xf */ Lane::Invalid,
];

/// Classifies a decoded code point. Anything outside the BMP has no lane.
pub fn lane_of(codepoint: char) -> Lane {
    let value = u32::from(codepoint);
    if value > 0xffff {
        return Lane::Invalid;
    }
    FROM_LANE[(value >> 12) as usize]
}

//==================================================================================
// 3. Tagging
//==================================================================================

/// Embeds a 15-bit symbol into its data code point.
pub fn tag_symbol(symbol: u16) -> char {
    let prefix = TO_LANE[usize::from((symbol >> 12) & 0b111)];
    let codepoint = u32::from((symbol & LOW_BITS_MASK) | prefix);
    debug_assert!(!(0xd800..=0xdfff).contains(&codepoint));
    // Every prefix lands in 0x4000..=0x9fff or 0xb000..=0xcfff, never a surrogate.
    char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Recovers the 15-bit symbol from a data code point whose lane is `top_bits`.
pub fn untag(codepoint: char, top_bits: u8) -> u16 {
    ((u32::from(codepoint) as u16) & LOW_BITS_MASK) | (u16::from(top_bits) << 12)
}

//==================================================================================
// 4. Padding Marker
//==================================================================================

/// The marker appended after a final symbol holding `valid_bits` data bits.
pub fn padding_marker(valid_bits: u32) -> char {
    debug_assert!((1..BITS_PER_SYMBOL).contains(&valid_bits));
    char::from(PAD_BASE + valid_bits as u8)
}

/// Returns the genuine bit count a marker announces, or `None` when the
/// character lies outside `PAD_BASE + 1 ..= PAD_BASE + 15`.
pub fn marker_valid_bits(marker: u32) -> Option<u32> {
    let base = u32::from(PAD_BASE);
    if marker > base && marker <= base + BITS_PER_SYMBOL {
        Some(marker - base)
    } else {
        None
    }
}

//==================================================================================
// 5. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_prefix_lands_in_a_data_block() {
        for top in 0u16..8 {
            for low in [0u16, 0x0fff] {
                let c = tag_symbol(top << 12 | low);
                let v = u32::from(c);
                assert!(
                    (0x4000..=0x9fff).contains(&v) || (0xb000..=0xcfff).contains(&v),
                    "symbol top bits {:03b} produced U+{:04X}",
                    top,
                    v
                );
            }
        }
    }

    #[test]
    fn test_from_lane_inverts_to_lane() {
        for top in 0u8..8 {
            let prefix = TO_LANE[top as usize];
            assert_eq!(FROM_LANE[(prefix >> 12) as usize], Lane::Data(top));
        }
    }

    #[test]
    fn test_tag_then_untag_restores_symbol() {
        for symbol in [0u16, 1, 0x0fff, 0x1000, 0x2abc, 0x4321, 0x7fff] {
            let c = tag_symbol(symbol);
            match lane_of(c) {
                Lane::Data(top) => assert_eq!(untag(c, top), symbol),
                other => panic!("expected a data lane, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unassigned_nibbles_are_invalid() {
        for c in ['\u{1234}', '\u{a000}', '\u{d7a3}', '\u{e000}', '\u{fffd}', '😀'] {
            assert_eq!(lane_of(c), Lane::Invalid, "U+{:04X}", u32::from(c));
        }
        assert_eq!(lane_of('i'), Lane::Padding);
    }

    #[test]
    fn test_marker_range_boundaries() {
        let base = u32::from(PAD_BASE);
        assert_eq!(marker_valid_bits(base), None);
        assert_eq!(marker_valid_bits(base + 1), Some(1));
        assert_eq!(marker_valid_bits(base + 15), Some(15));
        assert_eq!(marker_valid_bits(base + 16), None);
        assert_eq!(padding_marker(8), 'i');
    }
}
