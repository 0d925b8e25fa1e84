//! Roman to integer decoding with canonical-form validation.
//!
//! Validation runs in four passes: alphabet, grammar, accumulation, and a
//! re-encode comparison. Any failure after the empty check is reported as the
//! same user-facing format error.

use crate::codec::encode::encode;
use crate::codec::error::FormatError;
use crate::codec::table::symbol_value;
use once_cell::sync::Lazy;
use regex::Regex;

static CANONICAL_ROMAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("valid canonical roman regex")
});

/// Decodes a canonical Roman numeral into its integer value.
///
/// Input is matched case-sensitively; callers that want to accept lowercase
/// must normalize before calling.
///
/// # Errors
/// - `FormatError::Empty` for empty input.
/// - `FormatError::InvalidSymbol` for any character outside `I V X L C D M`.
/// - `FormatError::InvalidStructure` when the letters break the canonical
///   grammar (runs of four, out-of-order magnitudes, `IL`, `VX`, ...).
/// - `FormatError::NonCanonical` when the value does not re-encode to `text`.
pub fn decode(text: &str) -> Result<u16, FormatError> {
    if text.is_empty() {
        return Err(FormatError::Empty);
    }

    let values = lex(text)?;

    if !CANONICAL_ROMAN_RE.is_match(text) {
        return Err(FormatError::InvalidStructure);
    }

    let total = accumulate(&values);

    // Grammar already guarantees this; kept so decode stays the exact left
    // inverse of encode.
    match encode(i64::from(total)) {
        Ok(reencoded) if reencoded == text => Ok(total),
        _ => Err(FormatError::NonCanonical),
    }
}

fn lex(text: &str) -> Result<Vec<u16>, FormatError> {
    text.chars()
        .enumerate()
        .map(|(position, symbol)| {
            symbol_value(symbol).ok_or(FormatError::InvalidSymbol { symbol, position })
        })
        .collect()
}

fn accumulate(values: &[u16]) -> u16 {
    let mut total = 0u16;
    let mut index = 0;
    while index < values.len() {
        let current = values[index];
        match values.get(index + 1) {
            Some(&next) if next > current => {
                total += next - current;
                index += 2;
            }
            _ => {
                total += current;
                index += 1;
            }
        }
    }
    total
}
