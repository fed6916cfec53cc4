//! Exact output-size predictors for both directions, used to pre-size buffers
//! without running the transform.

use super::lanes::{marker_valid_bits, BITS_PER_BYTE, BITS_PER_SYMBOL};

const BITS_PER_BYTE_USIZE: usize = BITS_PER_BYTE as usize;
const BITS_PER_SYMBOL_USIZE: usize = BITS_PER_SYMBOL as usize;

/// Returns the number of code points `src_len` bytes encode to, including the
/// padding marker. A ceiling division of the bit length, see Hacker's Delight
/// (2nd ed.) p. 139.
pub fn encoded_length(src_len: usize) -> usize {
    let bits = src_len * BITS_PER_BYTE_USIZE;
    let symbols = bits.div_ceil(BITS_PER_SYMBOL_USIZE);
    if bits % BITS_PER_SYMBOL_USIZE != 0 {
        symbols + 1
    } else {
        symbols
    }
}

/// Returns the number of bytes that `codepoints` code points decode to, given
/// the last byte of the encoded text.
///
/// A trailing byte inside the marker range means the text is padded; a data
/// code point always ends in a UTF-8 continuation byte, so the two can not be
/// confused. The result is exact only for well-formed encoder output; for
/// arbitrary text it is a sizing hint.
pub fn decoded_length(codepoints: usize, trailing_byte: u8) -> usize {
    if codepoints == 0 {
        return 0;
    }
    match marker_valid_bits(u32::from(trailing_byte)) {
        Some(valid_bits) => {
            let symbols = codepoints - 1;
            if symbols == 0 {
                return 0;
            }
            ((symbols - 1) * BITS_PER_SYMBOL_USIZE + valid_bits as usize) / BITS_PER_BYTE_USIZE
        }
        None => codepoints * BITS_PER_SYMBOL_USIZE / BITS_PER_BYTE_USIZE,
    }
}

/// Convenience wrapper over `decoded_length` that inspects the encoded bytes.
pub fn decoded_length_of(encoded: &[u8]) -> usize {
    match encoded.last() {
        Some(&trailing) => decoded_length(String::from_utf8_lossy(encoded).chars().count(), trailing),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_length_small_inputs() {
        assert_eq!(encoded_length(0), 0);
        // 8 bits -> 1 symbol + marker
        assert_eq!(encoded_length(1), 2);
        // 16 bits -> 2 symbols + marker
        assert_eq!(encoded_length(2), 3);
        // 120 bits -> 8 symbols, no marker
        assert_eq!(encoded_length(15), 8);
        assert_eq!(encoded_length(16), 10);
        assert_eq!(encoded_length(30), 16);
    }

    #[test]
    fn test_decoded_length_padded_and_unpadded() {
        assert_eq!(decoded_length(0, 0), 0);
        assert_eq!(decoded_length(2, b'i'), 1);
        assert_eq!(decoded_length(3, b'b'), 2);
        assert_eq!(decoded_length(8, 0x80), 15);
        assert_eq!(decoded_length(10, b'i'), 16);
    }

    #[test]
    fn test_decoded_length_is_a_hint_for_foreign_trailers() {
        // 'z' lies outside the marker range, so all 5 code points count as data.
        assert_eq!(decoded_length(5, b'z'), 9);
    }

    #[test]
    fn test_decoded_length_of_marker_only() {
        assert_eq!(decoded_length_of(b""), 0);
        assert_eq!(decoded_length_of(b"i"), 0);
        assert_eq!(decoded_length_of("耀i".as_bytes()), 1);
    }
}
