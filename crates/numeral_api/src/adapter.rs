//! Transport-neutral request adapter over the numeral codec.
//!
//! # Responsibility
//! - Turn raw request parameters into codec calls.
//! - Map codec outcomes to status + body envelopes any transport can emit.
//!
//! # Invariants
//! - No conversion logic lives here; every value goes through `numeral_core`.
//! - Handlers never panic; every input yields an envelope.
//! - Log lines carry metadata only (route, status, input length).

use crate::config::{AdapterConfig, CasePolicy};
use crate::messages::error_message;
use log::{info, warn};
use numeral_core::{decode, encode, ArabicValue, CodecError, FormatError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;

const NOT_FOUND_MESSAGE: &str = "not found";

/// Conversion endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Arabic to Roman, parameter `arabic`.
    ArabicToRoman,
    /// Roman to Arabic, parameter `roman`.
    RomanToArabic,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::ArabicToRoman => "/a2r",
            Self::RomanToArabic => "/r2a",
        }
    }

    /// Query parameter carrying the value to convert.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::ArabicToRoman => "arabic",
            Self::RomanToArabic => "roman",
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/') {
            "a2r" => Ok(Self::ArabicToRoman),
            "r2a" => Ok(Self::RomanToArabic),
            other => Err(format!("unknown route `/{other}`; expected /a2r|/r2a")),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Response body; serializes to exactly one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Roman { roman: String },
    Arabic { arabic: u16 },
    Error { error: String },
}

/// Status + body envelope returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ConversionResponse {
    fn roman(roman: String) -> Self {
        Self {
            status: STATUS_OK,
            body: ResponseBody::Roman { roman },
        }
    }

    fn arabic(arabic: u16) -> Self {
        Self {
            status: STATUS_OK,
            body: ResponseBody::Arabic { arabic },
        }
    }

    fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Error {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Renders the body as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// Request adapter bound to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestAdapter {
    config: AdapterConfig,
}

impl RequestAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> AdapterConfig {
        self.config
    }

    /// Routes a request by path, reading the route's parameter via `params`.
    ///
    /// Unknown paths yield a 404 envelope.
    pub fn dispatch<'q>(
        &self,
        path: &str,
        params: impl Fn(&str) -> Option<&'q str>,
    ) -> ConversionResponse {
        match path.parse::<Route>() {
            Ok(route) => self.handle(route, params(route.param_name())),
            Err(_) => {
                warn!(
                    "event=dispatch module=api status=not_found path_len={}",
                    path.len()
                );
                ConversionResponse::failure(STATUS_NOT_FOUND, NOT_FOUND_MESSAGE)
            }
        }
    }

    /// Handles one conversion with an optional raw parameter.
    pub fn handle(&self, route: Route, raw: Option<&str>) -> ConversionResponse {
        match route {
            Route::ArabicToRoman => self.arabic_to_roman(raw),
            Route::RomanToArabic => self.roman_to_arabic(raw),
        }
    }

    /// `/a2r`: accepts only plain base-10 digit literals.
    ///
    /// A missing parameter is reported as the range error.
    pub fn arabic_to_roman(&self, raw: Option<&str>) -> ConversionResponse {
        let route = Route::ArabicToRoman;
        let input_len = raw.map_or(0, str::len);
        let result = raw
            .unwrap_or_default()
            .parse::<ArabicValue>()
            .and_then(|value| encode(i64::from(value.get())))
            .map_err(CodecError::from);

        match result {
            Ok(roman) => {
                log_success(route, input_len);
                ConversionResponse::roman(roman)
            }
            Err(err) => self.reject(route, input_len, &err),
        }
    }

    /// `/r2a`: decodes after applying the configured case policy.
    ///
    /// A missing parameter is reported as the empty-input format error.
    pub fn roman_to_arabic(&self, raw: Option<&str>) -> ConversionResponse {
        let route = Route::RomanToArabic;
        let input_len = raw.map_or(0, str::len);
        let result = match raw {
            Some(text) => decode(&self.config.case_policy.apply(text)),
            None => Err(FormatError::Empty),
        }
        .map_err(CodecError::from);

        match result {
            Ok(arabic) => {
                log_success(route, input_len);
                ConversionResponse::arabic(arabic)
            }
            Err(err) => self.reject(route, input_len, &err),
        }
    }

    fn reject(&self, route: Route, input_len: usize, err: &CodecError) -> ConversionResponse {
        warn!(
            "event=convert module=api route={} status=rejected kind={} input_len={} case_policy={}",
            route,
            error_kind(err),
            input_len,
            case_policy_label(self.config.case_policy)
        );
        ConversionResponse::failure(STATUS_BAD_REQUEST, error_message(err, self.config.locale))
    }
}

fn log_success(route: Route, input_len: usize) {
    info!(
        "event=convert module=api route={} status=ok input_len={}",
        route, input_len
    );
}

fn error_kind(err: &CodecError) -> &'static str {
    match err {
        CodecError::Range(_) => "range",
        CodecError::Format(_) => "format",
    }
}

fn case_policy_label(policy: CasePolicy) -> &'static str {
    match policy {
        CasePolicy::Strict => "strict",
        CasePolicy::Fold => "fold",
    }
}
