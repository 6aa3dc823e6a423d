//! Error types for Chuck Norris encoding and decoding.

use thiserror::Error;

use crate::validate::Stage;

/// Errors that can occur while encoding text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Nothing to encode
    #[error("input string is empty")]
    EmptyInput,

    /// Character code does not fit in 7 bits
    #[error("unsupported character {character:?} at position {position} (code must be 0-127)")]
    UnsupportedCharacter { character: char, position: usize },
}

/// Reasons an encoded line is rejected before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEncoding {
    /// Block marker is neither `"0"` nor `"00"`
    #[error("block {block}: marker {marker:?} is not \"0\" or \"00\"")]
    InvalidMarker { block: usize, marker: String },

    /// Block has no count field
    #[error("block {block}: count field is missing")]
    MissingCountField { block: usize },

    /// Count field contains something other than `'0'`
    #[error("block {block}: count field {field:?} must contain only '0'")]
    InvalidCountField { block: usize, field: String },

    /// Reconstructed bit string cannot be split into 7-bit codes
    #[error("bit length {bits} is not a multiple of 7")]
    BitLength { bits: usize },
}

impl InvalidEncoding {
    /// Pipeline stage that rejected the line.
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidMarker { .. }
            | Self::MissingCountField { .. }
            | Self::InvalidCountField { .. } => Stage::BlockCheck,
            Self::BitLength { .. } => Stage::LengthCheck,
        }
    }
}

/// Either direction's failure, for callers that drive both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("cannot encode")]
    Encode(#[from] EncodeError),

    #[error("encoded string is not valid")]
    Decode(#[from] InvalidEncoding),
}
