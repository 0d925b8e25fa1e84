//! Arabic and Roman numeral value types.
//!
//! # Responsibility
//! - Wrap codec inputs/outputs in newtypes that cannot hold invalid state.
//! - Serialize as plain numbers/strings and re-validate on deserialization.
//!
//! # Invariants
//! - Construction always goes through `encode`/`decode` range and format
//!   checks; there is no unchecked constructor.

use crate::codec::error::{FormatError, RangeError};
use crate::codec::table::{MAX_VALUE, MIN_VALUE};
use crate::codec::{decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Digits in `MAX_VALUE`; longer literals are rejected before parsing.
const MAX_SIGNIFICANT_DIGITS: usize = 4;

/// Integer in `[1, 3999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct ArabicValue(u16);

impl ArabicValue {
    pub const MIN: Self = Self(MIN_VALUE);
    pub const MAX: Self = Self(MAX_VALUE);

    /// Validates `value` against the codec domain.
    pub fn new(value: i64) -> Result<Self, RangeError> {
        if value < i64::from(MIN_VALUE) || value > i64::from(MAX_VALUE) {
            return Err(RangeError::OutOfRange(value));
        }
        Ok(Self(value as u16))
    }

    /// Parses a plain base-10 digit literal.
    ///
    /// Signs, decimal points and whitespace are rejected rather than trimmed.
    /// Leading zeros are accepted (`"0010"` is ten).
    pub fn parse_digits(text: &str) -> Result<Self, RangeError> {
        if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(RangeError::NotNumeric);
        }
        let significant = text.trim_start_matches('0');
        if significant.len() > MAX_SIGNIFICANT_DIGITS {
            return Err(RangeError::TooLong {
                digits: significant.len(),
            });
        }
        let value = significant.parse::<i64>().unwrap_or(0);
        Self::new(value)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the canonical Roman spelling of this value.
    pub fn to_roman(self) -> RomanNumeral {
        RomanNumeral::from(self)
    }
}

impl TryFrom<i64> for ArabicValue {
    type Error = RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for ArabicValue {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(RangeError::NotInteger);
        }
        if value < f64::from(MIN_VALUE) || value > f64::from(MAX_VALUE) {
            return Err(RangeError::OutOfRange(value as i64));
        }
        Self::new(value as i64)
    }
}

impl FromStr for ArabicValue {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_digits(s)
    }
}

impl From<ArabicValue> for u16 {
    fn from(value: ArabicValue) -> Self {
        value.0
    }
}

impl Display for ArabicValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical Roman numeral paired with its decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RomanNumeral {
    text: String,
    value: ArabicValue,
}

impl RomanNumeral {
    /// Validates `text` as a canonical numeral (case-sensitive).
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let value = decode(text)?;
        Ok(Self {
            text: text.to_string(),
            value: ArabicValue(value),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> ArabicValue {
        self.value
    }
}

impl From<ArabicValue> for RomanNumeral {
    fn from(value: ArabicValue) -> Self {
        // In-range values always encode; an empty string would only surface
        // if the domain constants and digit table diverged.
        let text = encode(i64::from(value.0)).unwrap_or_default();
        Self { text, value }
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let decoded = decode(&value)?;
        Ok(Self {
            text: value,
            value: ArabicValue(decoded),
        })
    }
}

impl FromStr for RomanNumeral {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RomanNumeral> for String {
    fn from(value: RomanNumeral) -> Self {
        value.text
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Display for RomanNumeral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::{ArabicValue, RomanNumeral};
    use crate::codec::error::{FormatError, RangeError};

    #[test]
    fn parse_digits_rejects_non_digit_text() {
        for text in ["", "+5", "-5", "1.0", " 5", "5 ", "1e3", "٣"] {
            assert_eq!(
                ArabicValue::parse_digits(text),
                Err(RangeError::NotNumeric),
                "`{text}` must be rejected"
            );
        }
    }

    #[test]
    fn parse_digits_handles_leading_zeros_and_overflow() {
        assert_eq!(ArabicValue::parse_digits("0010").unwrap().get(), 10);
        assert_eq!(
            ArabicValue::parse_digits("0000"),
            Err(RangeError::OutOfRange(0))
        );
        let overlong = ArabicValue::parse_digits("99999999999999999999999").unwrap_err();
        assert_eq!(overlong, RangeError::TooLong { digits: 23 });
        assert_eq!(
            overlong.to_string(),
            "value must be an integer between 1 and 3999"
        );
        assert_eq!(
            ArabicValue::parse_digits("0040000"),
            Err(RangeError::TooLong { digits: 5 })
        );
    }

    #[test]
    fn roman_from_arabic_matches_decoded_value() {
        let value = ArabicValue::new(1994).unwrap();
        let roman = value.to_roman();
        assert_eq!(roman.as_str(), "MCMXCIV");
        assert_eq!(roman.value(), value);
    }

    #[test]
    fn roman_parse_is_case_sensitive() {
        assert!(matches!(
            RomanNumeral::parse("mcmxciv"),
            Err(FormatError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn bounds_constants_are_in_domain() {
        assert_eq!(ArabicValue::MIN.get(), 1);
        assert_eq!(ArabicValue::MAX.get(), 3999);
        assert_eq!(ArabicValue::MAX.to_roman().as_str(), "MMMCMXCIX");
    }
}
