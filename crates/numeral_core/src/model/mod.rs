//! Validated value types for both numeral encodings.
//!
//! # Responsibility
//! - Carry codec preconditions in the type system once checked.
//! - Define the serde wire shape of both encodings.
//!
//! # Invariants
//! - An `ArabicValue` is always in `[1, 3999]`.
//! - A `RomanNumeral` is always the canonical spelling of its value.

pub mod numeral;
