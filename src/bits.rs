//! Conversion between text and 7-bit bit strings.
//!
//! A bit string is an ASCII string of `'0'` and `'1'` characters. Each
//! character of the source text occupies exactly [`CODE_WIDTH`] bits,
//! zero-padded on the left.
//!
//! ## Bit Ordering
//! Codes are written MSB-first:
//! - `'C'` (67) → `1000011`
//! - `' '` (32) → `0100000`

use crate::error::{EncodeError, InvalidEncoding};

/// Number of bits per character code.
pub const CODE_WIDTH: usize = 7;

/// Largest character code that fits in [`CODE_WIDTH`] bits.
pub const MAX_CODE: u32 = (1 << CODE_WIDTH) - 1;

/// Render text as a concatenation of 7-bit codes.
///
/// # Returns
/// The bit string, or an error if the text is empty or a character code
/// exceeds [`MAX_CODE`].
pub fn text_to_bits(text: &str) -> Result<String, EncodeError> {
    if text.is_empty() {
        return Err(EncodeError::EmptyInput);
    }

    let mut bits = String::with_capacity(text.len() * CODE_WIDTH);

    for (position, character) in text.chars().enumerate() {
        let code = u32::from(character);
        if code > MAX_CODE {
            return Err(EncodeError::UnsupportedCharacter {
                character,
                position,
            });
        }

        for shift in (0..CODE_WIDTH).rev() {
            bits.push(if (code >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }

    Ok(bits)
}

/// Read a bit string back as text, 7 bits per character.
///
/// Any byte other than `'1'` is read as a zero bit; callers pass bit
/// strings they built themselves.
///
/// # Returns
/// The decoded text, or [`InvalidEncoding::BitLength`] if the length is not
/// a multiple of [`CODE_WIDTH`]. Never truncates or pads.
pub fn bits_to_text(bits: &str) -> Result<String, InvalidEncoding> {
    if bits.len() % CODE_WIDTH != 0 {
        return Err(InvalidEncoding::BitLength { bits: bits.len() });
    }

    let text = bits
        .as_bytes()
        .chunks_exact(CODE_WIDTH)
        .map(|chunk| {
            let code = chunk
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit == b'1'));
            char::from(code)
        })
        .collect();

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_bits_single() {
        assert_eq!(text_to_bits("C").unwrap(), "1000011");
        assert_eq!(text_to_bits(" ").unwrap(), "0100000");
    }

    #[test]
    fn test_text_to_bits_zero_padded() {
        assert_eq!(text_to_bits("\0").unwrap(), "0000000");
        assert_eq!(text_to_bits("\u{1}").unwrap(), "0000001");
        assert_eq!(text_to_bits("\u{7f}").unwrap(), "1111111");
    }

    #[test]
    fn test_text_to_bits_concatenates() {
        assert_eq!(text_to_bits("CC").unwrap(), "10000111000011");
        assert_eq!(text_to_bits("Hello").unwrap().len(), 5 * CODE_WIDTH);
    }

    #[test]
    fn test_text_to_bits_empty() {
        assert_eq!(text_to_bits(""), Err(EncodeError::EmptyInput));
    }

    #[test]
    fn test_text_to_bits_unsupported() {
        assert_eq!(
            text_to_bits("ab\u{80}"),
            Err(EncodeError::UnsupportedCharacter {
                character: '\u{80}',
                position: 2,
            })
        );

        // Position counts characters, not bytes
        assert_eq!(
            text_to_bits("é€"),
            Err(EncodeError::UnsupportedCharacter {
                character: 'é',
                position: 0,
            })
        );
    }

    #[test]
    fn test_bits_to_text() {
        assert_eq!(bits_to_text("1000011").unwrap(), "C");
        assert_eq!(bits_to_text("10000111000011").unwrap(), "CC");
        assert_eq!(bits_to_text("0000000").unwrap(), "\0");
        assert_eq!(bits_to_text("").unwrap(), "");
    }

    #[test]
    fn test_bits_to_text_bad_length() {
        assert_eq!(
            bits_to_text("11"),
            Err(InvalidEncoding::BitLength { bits: 2 })
        );
        assert_eq!(
            bits_to_text("10000110"),
            Err(InvalidEncoding::BitLength { bits: 8 })
        );
    }

    #[test]
    fn test_all_codes_round_trip() {
        for code in 0..=MAX_CODE {
            let character = char::from_u32(code).unwrap();
            let text = character.to_string();
            let bits = text_to_bits(&text).unwrap();
            assert_eq!(bits.len(), CODE_WIDTH);
            assert_eq!(bits_to_text(&bits).unwrap(), text);
        }
    }
}
