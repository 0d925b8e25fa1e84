//! Request adapter for the numeral converter.
//!
//! # Responsibility
//! - Expose `/a2r` and `/r2a` conversions as status + body envelopes.
//! - Own request-level policy (case folding, message language) so the codec
//!   stays pure.
//!
//! # Invariants
//! - Exported handlers never panic.
//! - Bodies carry exactly one of `roman`, `arabic` or `error`.

pub mod adapter;
pub mod config;
pub mod messages;

pub use adapter::{
    ConversionResponse, RequestAdapter, ResponseBody, Route, STATUS_BAD_REQUEST,
    STATUS_NOT_FOUND, STATUS_OK,
};
pub use config::{AdapterConfig, CasePolicy, MessageLocale};
pub use messages::error_message;
