//! Adapter configuration.
//!
//! # Responsibility
//! - Hold the request-level policies that sit outside the codec.
//! - Resolve them from the environment.
//!
//! # Invariants
//! - Defaults keep codec semantics untouched (`strict`, English messages).
//! - Unknown environment values are reported, never silently ignored.

use std::borrow::Cow;
use std::str::FromStr;

pub const CASE_POLICY_ENV: &str = "NUMERAL_CASE_POLICY";
pub const LOCALE_ENV: &str = "NUMERAL_LOCALE";

/// How decode input is normalized before it reaches the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CasePolicy {
    /// Pass input unchanged; lowercase numerals are rejected by the codec.
    #[default]
    Strict,
    /// Uppercase ASCII letters before decoding.
    Fold,
}

impl CasePolicy {
    /// Applies the policy to raw decode input.
    pub fn apply<'a>(self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Strict => Cow::Borrowed(raw),
            Self::Fold => Cow::Owned(raw.to_ascii_uppercase()),
        }
    }
}

impl FromStr for CasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "fold" => Ok(Self::Fold),
            other => Err(format!(
                "unsupported case policy `{other}`; expected strict|fold"
            )),
        }
    }
}

/// Language of user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageLocale {
    #[default]
    English,
    Spanish,
}

impl FromStr for MessageLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" => Ok(Self::Spanish),
            other => Err(format!("unsupported locale `{other}`; expected en|es")),
        }
    }
}

/// Request adapter policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdapterConfig {
    pub case_policy: CasePolicy,
    pub locale: MessageLocale,
}

impl AdapterConfig {
    /// Reads `NUMERAL_CASE_POLICY` and `NUMERAL_LOCALE`.
    ///
    /// Unset or blank variables fall back to defaults.
    ///
    /// # Errors
    /// Returns a message naming the accepted values when a variable is set to
    /// an unsupported value.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AdapterConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();
        if let Some(raw) = non_blank(lookup(CASE_POLICY_ENV)) {
            config.case_policy = raw
                .parse()
                .map_err(|err| format!("{CASE_POLICY_ENV}: {err}"))?;
        }
        if let Some(raw) = non_blank(lookup(LOCALE_ENV)) {
            config.locale = raw.parse().map_err(|err| format!("{LOCALE_ENV}: {err}"))?;
        }
        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AdapterConfig, CasePolicy, MessageLocale, CASE_POLICY_ENV, LOCALE_ENV};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AdapterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AdapterConfig::default());
        assert_eq!(config.case_policy, CasePolicy::Strict);
        assert_eq!(config.locale, MessageLocale::English);
    }

    #[test]
    fn reads_values_case_insensitively() {
        let config =
            AdapterConfig::from_lookup(lookup(&[(CASE_POLICY_ENV, " FOLD "), (LOCALE_ENV, "Es")]))
                .unwrap();
        assert_eq!(config.case_policy, CasePolicy::Fold);
        assert_eq!(config.locale, MessageLocale::Spanish);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AdapterConfig::from_lookup(lookup(&[(LOCALE_ENV, "  ")])).unwrap();
        assert_eq!(config.locale, MessageLocale::English);
    }

    #[test]
    fn rejects_unknown_values_with_variable_name() {
        let err = AdapterConfig::from_lookup(lookup(&[(CASE_POLICY_ENV, "lower")])).unwrap_err();
        assert!(err.starts_with(CASE_POLICY_ENV));
        assert!(err.contains("strict|fold"));

        let err = AdapterConfig::from_lookup(lookup(&[(LOCALE_ENV, "fr")])).unwrap_err();
        assert!(err.contains("en|es"));
    }

    #[test]
    fn fold_policy_uppercases_ascii_only() {
        assert_eq!(CasePolicy::Fold.apply("mcmXciv"), "MCMXCIV");
        assert_eq!(CasePolicy::Strict.apply("mcmxciv"), "mcmxciv");
    }
}
