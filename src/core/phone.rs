//! Phone Number Normalization
//!
//! Turns user-entered text into an E.164-like number by prefixing a
//! default country calling code when the text has no leading `+`.

use crate::error::{WaError, WaResult};
use lazy_static::lazy_static;
use regex::Regex;

/// Country calling code used when none is configured
pub const DEFAULT_COUNTRY_CODE: &str = "+972";

lazy_static! {
    static ref COUNTRY_CODE: Regex = Regex::new(r"^\+[0-9]{1,3}$").expect("valid regex");
}

/// Prefixes un-prefixed numbers with a default country calling code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNormalizer {
    country_code: String,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl PhoneNormalizer {
    /// Create a normalizer for the given country code (`+` and 1-3 digits)
    pub fn new(country_code: &str) -> WaResult<Self> {
        let code = country_code.trim();
        if !COUNTRY_CODE.is_match(code) {
            return Err(WaError::Config(format!(
                "invalid country code '{}': expected '+' followed by 1-3 digits",
                country_code
            )));
        }
        Ok(Self {
            country_code: code.to_string(),
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Normalize raw input. Text that already starts with `+` is returned
    /// as-is; everything else gets the country code prepended verbatim.
    ///
    /// Call this once per submission: un-prefixed input is not stable
    /// under repeated application with a code that lacks `+`.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.starts_with('+') {
            raw.to_string()
        } else {
            format!("{}{}", self.country_code, raw)
        }
    }
}
