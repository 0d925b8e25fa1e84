//! Core numeral conversion logic.
//! This crate is the single source of truth for codec invariants.

pub mod codec;
pub mod logging;
pub mod model;

pub use codec::error::{CodecError, FormatError, RangeError};
pub use codec::table::{symbol_value, DigitValue, DIGIT_VALUES, MAX_VALUE, MIN_VALUE};
pub use codec::{decode, encode};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::numeral::{ArabicValue, RomanNumeral};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
