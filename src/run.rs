//! Runs of identical bits and the markers that tag them.

/// Marker literal that opens a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `"0"`: run of 1-bits
    Ones,
    /// `"00"`: run of 0-bits
    Zeros,
}

impl Marker {
    /// Serialized form of the marker.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ones => "0",
            Self::Zeros => "00",
        }
    }

    /// Bit character repeated by runs carrying this marker.
    pub const fn bit(self) -> char {
        match self {
            Self::Ones => '1',
            Self::Zeros => '0',
        }
    }

    /// Marker for a run of `bit` (any byte other than `b'1'` is a zero bit).
    pub const fn from_bit(bit: u8) -> Self {
        if bit == b'1' {
            Self::Ones
        } else {
            Self::Zeros
        }
    }

    /// Parse a marker literal. Only the exact strings `"0"` and `"00"` match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "0" => Some(Self::Ones),
            "00" => Some(Self::Zeros),
            _ => None,
        }
    }
}

/// Maximal sequence of identical bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub marker: Marker,
    pub len: usize,
}

impl Run {
    pub const fn new(marker: Marker, len: usize) -> Self {
        Self { marker, len }
    }

    /// Serialize as `<marker> <count field>`.
    pub fn token(&self) -> String {
        format!("{} {}", self.marker.as_str(), "0".repeat(self.len))
    }
}

/// Iterator over the runs of a bit string.
///
/// Created by [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    bits: &'a [u8],
    pos: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let first = *self.bits.get(self.pos)?;
        let start = self.pos;

        // Seed from the first bit, then extend while bits repeat
        self.pos += 1;
        while self.bits.get(self.pos) == Some(&first) {
            self.pos += 1;
        }

        Some(Run::new(Marker::from_bit(first), self.pos - start))
    }
}

/// Partition a bit string into maximal runs, left to right.
pub fn runs(bits: &str) -> Runs<'_> {
    Runs {
        bits: bits.as_bytes(),
        pos: 0,
    }
}
