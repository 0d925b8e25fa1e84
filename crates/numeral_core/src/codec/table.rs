//! Symbol tables shared by encode and decode.

/// Smallest value the codec accepts.
pub const MIN_VALUE: u16 = 1;
/// Largest value the codec accepts.
pub const MAX_VALUE: u16 = 3999;

/// One entry of the greedy encoding basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitValue {
    pub value: u16,
    pub symbol: &'static str,
}

const fn digit(value: u16, symbol: &'static str) -> DigitValue {
    DigitValue { value, symbol }
}

/// Greedy encoding basis, strictly descending by value.
///
/// Traversal order is part of the contract: `encode` walks this slice front to
/// back, and the subtractive pairs must precede the atomic symbol they
/// pre-empt.
pub const DIGIT_VALUES: [DigitValue; 13] = [
    digit(1000, "M"),
    digit(900, "CM"),
    digit(500, "D"),
    digit(400, "CD"),
    digit(100, "C"),
    digit(90, "XC"),
    digit(50, "L"),
    digit(40, "XL"),
    digit(10, "X"),
    digit(9, "IX"),
    digit(5, "V"),
    digit(4, "IV"),
    digit(1, "I"),
];

/// Returns the value of one atomic Roman letter.
///
/// Matching is case-sensitive; only the uppercase letters `I V X L C D M`
/// have a value.
pub fn symbol_value(symbol: char) -> Option<u16> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}
