//! Integer to Roman encoding.

use crate::codec::error::RangeError;
use crate::codec::table::{DIGIT_VALUES, MAX_VALUE, MIN_VALUE};

/// Longest canonical numeral in range (`MMMDCCCLXXXVIII`, 3888).
const MAX_ENCODED_LEN: usize = 15;

/// Encodes `value` into its canonical Roman spelling.
///
/// Greedy subtraction over [`DIGIT_VALUES`]: each entry is appended while the
/// remainder still covers it.
///
/// # Errors
/// - Returns `RangeError::OutOfRange` when `value` is outside `[1, 3999]`.
pub fn encode(value: i64) -> Result<String, RangeError> {
    if value < i64::from(MIN_VALUE) || value > i64::from(MAX_VALUE) {
        return Err(RangeError::OutOfRange(value));
    }

    let mut remainder = value as u16;
    let mut roman = String::with_capacity(MAX_ENCODED_LEN);
    for entry in DIGIT_VALUES {
        while remainder >= entry.value {
            roman.push_str(entry.symbol);
            remainder -= entry.value;
        }
    }
    debug_assert_eq!(remainder, 0);
    Ok(roman)
}

#[cfg(test)]
mod tests {
    use super::{encode, MAX_ENCODED_LEN};
    use crate::codec::error::RangeError;

    #[test]
    fn encodes_atomic_symbols() {
        assert_eq!(encode(1).unwrap(), "I");
        assert_eq!(encode(5).unwrap(), "V");
        assert_eq!(encode(10).unwrap(), "X");
        assert_eq!(encode(50).unwrap(), "L");
        assert_eq!(encode(100).unwrap(), "C");
        assert_eq!(encode(500).unwrap(), "D");
        assert_eq!(encode(1000).unwrap(), "M");
    }

    #[test]
    fn rejects_values_outside_domain() {
        assert_eq!(encode(0), Err(RangeError::OutOfRange(0)));
        assert_eq!(encode(4000), Err(RangeError::OutOfRange(4000)));
        assert_eq!(encode(-7), Err(RangeError::OutOfRange(-7)));
        assert_eq!(encode(i64::MAX), Err(RangeError::OutOfRange(i64::MAX)));
    }

    #[test]
    fn output_never_exceeds_capacity_hint() {
        let longest = (1..=3999)
            .map(|value| encode(value).unwrap().len())
            .max()
            .unwrap_or_default();
        assert_eq!(longest, MAX_ENCODED_LEN);
        assert_eq!(encode(3888).unwrap(), "MMMDCCCLXXXVIII");
    }
}
