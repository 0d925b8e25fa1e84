//! Codec failure taxonomy.
//!
//! # Invariants
//! - Encode only fails with `RangeError`; decode only fails with `FormatError`.
//! - `Display` output is the stable, user-facing message; variant payloads
//!   are diagnostics and never change the rendered text.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable message for any encode-side domain violation.
pub const RANGE_MESSAGE: &str = "value must be an integer between 1 and 3999";
/// Stable message for empty decode input.
pub const EMPTY_INPUT_MESSAGE: &str = "input must be a non-empty string";
/// Stable message for any other decode-side violation.
pub const FORMAT_MESSAGE: &str = "invalid or out-of-range Roman numeral format";

/// Encode-side failure: the value is not an integer in `[1, 3999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Integer outside `[1, 3999]`.
    OutOfRange(i64),
    /// Numeric value with a fractional part, or not finite.
    NotInteger,
    /// Text that is missing or is not a plain base-10 digit literal.
    NotNumeric,
    /// Digit literal with more significant digits than any in-range value.
    TooLong { digits: usize },
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(RANGE_MESSAGE)
    }
}

impl Error for RangeError {}

/// Decode-side failure: the text is not a canonical Roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Empty (or missing) input.
    Empty,
    /// Character outside the uppercase `I V X L C D M` alphabet.
    InvalidSymbol { symbol: char, position: usize },
    /// Letters are valid but do not follow the canonical grammar.
    InvalidStructure,
    /// Accumulated value does not re-encode to the input.
    NonCanonical,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_INPUT_MESSAGE),
            Self::InvalidSymbol { .. } | Self::InvalidStructure | Self::NonCanonical => {
                f.write_str(FORMAT_MESSAGE)
            }
        }
    }
}

impl Error for FormatError {}

/// Either codec failure, for callers that handle both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    Range(RangeError),
    Format(FormatError),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range(err) => write!(f, "{err}"),
            Self::Format(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<RangeError> for CodecError {
    fn from(value: RangeError) -> Self {
        Self::Range(value)
    }
}

impl From<FormatError> for CodecError {
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}
