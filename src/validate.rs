//! Structural validation of encoded lines.
//!
//! An encoded line is split on single spaces and paired into blocks of
//! `(marker, count field)`. Three independent rules must hold before the
//! blocks are decoded:
//!
//! - a. every marker is exactly `"0"` or `"00"` ([`check_markers`])
//! - b. every count field is non-empty and only `'0'` ([`check_count_fields`])
//! - c. the total bit count is a multiple of 7 ([`check_bit_length`])
//!
//! ## Pipeline
//!
//! ```text
//! Start → Split → BlockCheck ─┬→ LengthCheck ─┬→ Decode → Done
//!                             └→ Invalid      └→ Invalid
//! ```
//!
//! The first violated rule short-circuits; no partial output is produced.

use tracing::debug;

use crate::bits::CODE_WIDTH;
use crate::encode::SEPARATOR;
use crate::error::InvalidEncoding;
use crate::run::{Marker, Run};

/// Pipeline stage that can reject an encoded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Marker and count-field rules
    BlockCheck,
    /// Total bit length rule
    LengthCheck,
}

/// One `(marker, count field)` pair of an encoded line, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub marker: &'a str,
    pub count: &'a str,
}

/// Split a line on single spaces and pair the pieces two at a time.
///
/// An odd trailing piece gets an empty count field. Doubled, leading or
/// trailing spaces yield empty pieces, which the checks later reject.
pub fn split_blocks(line: &str) -> Vec<Block<'_>> {
    let pieces: Vec<&str> = line.split(SEPARATOR).collect();

    pieces
        .chunks(2)
        .map(|pair| Block {
            marker: pair[0],
            count: pair.get(1).copied().unwrap_or(""),
        })
        .collect()
}

/// Rule a: every marker is `"0"` or `"00"`.
///
/// # Returns
/// The parsed marker of every block, or the first offending block.
pub fn check_markers(blocks: &[Block<'_>]) -> Result<Vec<Marker>, InvalidEncoding> {
    blocks
        .iter()
        .enumerate()
        .map(|(block, b)| {
            Marker::parse(b.marker).ok_or_else(|| InvalidEncoding::InvalidMarker {
                block,
                marker: b.marker.to_string(),
            })
        })
        .collect()
}

/// Rule b: every count field is non-empty and made only of `'0'`.
///
/// # Returns
/// The run length of every block, or the first offending block.
pub fn check_count_fields(blocks: &[Block<'_>]) -> Result<Vec<usize>, InvalidEncoding> {
    blocks
        .iter()
        .enumerate()
        .map(|(block, b)| {
            if b.count.is_empty() {
                Err(InvalidEncoding::MissingCountField { block })
            } else if b.count.bytes().any(|c| c != b'0') {
                Err(InvalidEncoding::InvalidCountField {
                    block,
                    field: b.count.to_string(),
                })
            } else {
                Ok(b.count.len())
            }
        })
        .collect()
}

/// Rule c: the reconstructed bit string splits evenly into 7-bit codes.
///
/// # Returns
/// The total bit count.
pub fn check_bit_length(blocks: &[Block<'_>]) -> Result<usize, InvalidEncoding> {
    let bits: usize = blocks.iter().map(|b| b.count.len()).sum();

    if bits % CODE_WIDTH != 0 {
        return Err(InvalidEncoding::BitLength { bits });
    }

    Ok(bits)
}

/// Validate an encoded line and return its runs.
///
/// # Returns
/// One [`Run`] per block, or the first rule violation.
pub fn validate(line: &str) -> Result<Vec<Run>, InvalidEncoding> {
    let blocks = split_blocks(line);

    let checked = check_markers(&blocks).and_then(|markers| {
        let lengths = check_count_fields(&blocks)?;
        check_bit_length(&blocks)?;
        Ok((markers, lengths))
    });

    match checked {
        Ok((markers, lengths)) => Ok(markers
            .into_iter()
            .zip(lengths)
            .map(|(marker, len)| Run::new(marker, len))
            .collect()),
        Err(err) => {
            debug!(stage = ?err.stage(), blocks = blocks.len(), %err, "rejected encoded line");
            Err(err)
        }
    }
}
