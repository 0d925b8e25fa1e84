//! Bidirectional Roman numeral codec.
//!
//! # Responsibility
//! - Encode integers in `[1, 3999]` into their canonical Roman spelling.
//! - Decode Roman strings back into integers, accepting canonical forms only.
//!
//! # Invariants
//! - `encode(decode(s)) == s` for every accepted `s`.
//! - `decode(encode(n)) == n` for every `n` in range.
//! - Functions here are pure: no I/O, no logging, no shared mutable state.

pub mod decode;
pub mod encode;
pub mod error;
pub mod table;

pub use decode::decode;
pub use encode::encode;
