//! Chuck Norris encoding.
//!
//! Text is rendered as 7-bit codes, the resulting bit string is split into
//! maximal runs, and each run becomes a token:
//! - run of 1-bits → `0 <count field>`
//! - run of 0-bits → `00 <count field>`
//!
//! where the count field is one `'0'` per bit in the run.

use tracing::trace;

use crate::bits::text_to_bits;
use crate::error::EncodeError;
use crate::run::runs;

/// Token separator in the serialized form.
pub const SEPARATOR: char = ' ';

/// Encode text as a space-separated token stream.
///
/// # Arguments
/// * `text` - Non-empty text with every character code in 0-127
///
/// # Returns
/// The token string, or an error if the text is empty or contains a
/// character outside the 7-bit range.
///
/// # Example
/// ```
/// assert_eq!(chucknorris::encode("C").unwrap(), "0 0 00 0000 0 00");
/// ```
pub fn encode(text: &str) -> Result<String, EncodeError> {
    let bits = text_to_bits(text)?;

    let mut encoded = String::with_capacity(bits.len() * 2);
    let mut tokens = 0usize;

    for run in runs(&bits) {
        if tokens > 0 {
            encoded.push(SEPARATOR);
        }
        encoded.push_str(&run.token());
        tokens += 1;
    }

    trace!(chars = text.chars().count(), bits = bits.len(), tokens, "encoded text");

    Ok(encoded)
}
