//! Chuck Norris decoding.
//!
//! Inverse of [`encode`](crate::encode()): validated runs are expanded back
//! into a bit string, which is read 7 bits at a time as character codes.

use tracing::trace;

use crate::bits::bits_to_text;
use crate::error::InvalidEncoding;
use crate::run::Run;
use crate::validate::validate;

/// Expand runs into a bit string.
///
/// Marker `"0"` repeats `'1'`, marker `"00"` repeats `'0'`.
pub fn runs_to_bits(runs: &[Run]) -> String {
    let mut bits = String::with_capacity(runs.iter().map(|run| run.len).sum());

    for run in runs {
        bits.extend(std::iter::repeat(run.marker.bit()).take(run.len));
    }

    bits
}

/// Decode runs that already passed validation.
///
/// # Returns
/// The decoded text, or [`InvalidEncoding::BitLength`] if the runs do not
/// add up to a whole number of 7-bit codes.
pub fn decode_runs(runs: &[Run]) -> Result<String, InvalidEncoding> {
    let bits = runs_to_bits(runs);
    trace!(runs = runs.len(), bits = bits.len(), "decoding runs");
    bits_to_text(&bits)
}

/// Validate and decode an encoded line.
///
/// # Arguments
/// * `line` - Space-separated token stream, without line terminator
///
/// # Returns
/// The decoded text, or the first rule the line violates. Never returns
/// partially decoded text.
///
/// # Example
/// ```
/// assert_eq!(chucknorris::decode("0 0 00 0000 0 00").unwrap(), "C");
/// assert!(chucknorris::decode("0 00").is_err());
/// ```
pub fn decode(line: &str) -> Result<String, InvalidEncoding> {
    let runs = validate(line)?;
    decode_runs(&runs)
}
