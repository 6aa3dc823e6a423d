//! # Chuck Norris Cipher
//!
//! Two-way transcoder between 7-bit text and the "Chuck Norris" unary
//! run-length encoding.
//!
//! ## Encoding
//!
//! Every character is written as its 7-bit code, MSB first. The resulting
//! bit string is split into maximal runs of identical bits, and each run
//! becomes a token of two space-separated fields:
//!
//! | Run        | Marker | Count field             |
//! |------------|--------|-------------------------|
//! | `1` × n    | `0`    | `0` repeated n times    |
//! | `0` × n    | `00`   | `0` repeated n times    |
//!
//! `'C'` = `1000011` → `0 0 00 0000 0 00`
//!
//! ## Design
//!
//! - **Safe Rust** - `#![forbid(unsafe_code)]`
//! - **Pure functions** - no global state, every call is re-entrant
//! - **Typed rejection** - malformed input yields [`InvalidEncoding`] naming
//!   the offending block and pipeline [`Stage`], never partial output
//!
//! ## API Overview
//!
//! ### High-Level Functions
//!
//! - [`encode()`] - Text to token stream
//! - [`decode()`] - Token stream to text, after validation
//!
//! ### Validation
//!
//! - [`split_blocks`] - Pair the token stream into [`Block`]s
//! - [`check_markers`] / [`check_count_fields`] / [`check_bit_length`] -
//!   Independent structural rules
//! - [`validate`] - All rules in order, yielding [`Run`]s
//!
//! ### Primitives
//!
//! - [`text_to_bits`] / [`bits_to_text`] - 7-bit code conversion
//! - [`runs`] / [`runs_to_bits`] - Bit string to runs and back
//!
//! ### Console
//!
//! - [`Session`] - Prompt loop around [`encode()`] and [`decode()`]
//!
//! ## Usage
//!
//! ```rust
//! use chucknorris::{decode, encode};
//!
//! let encoded = encode("CC").unwrap();
//! assert_eq!(encoded, "0 0 00 0000 0 000 00 0000 0 00");
//! assert_eq!(decode(&encoded).unwrap(), "CC");
//!
//! assert!(decode("0 1 00 0").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod bits;
mod decode;
mod encode;
mod error;
mod run;
mod session;
mod validate;

pub use bits::{bits_to_text, text_to_bits, CODE_WIDTH, MAX_CODE};
pub use decode::{decode, decode_runs, runs_to_bits};
pub use encode::{encode, SEPARATOR};
pub use error::{CipherError, EncodeError, InvalidEncoding};
pub use run::{runs, Marker, Run, Runs};
pub use session::{Operation, Session, UnknownOperation};
pub use validate::{
    check_bit_length, check_count_fields, check_markers, split_blocks, validate, Block, Stage,
};
