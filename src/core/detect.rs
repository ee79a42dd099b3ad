//! Clipboard phone number detection
//!
//! One-shot heuristic run when the user interacts with the input field.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PHONE_NUMBER: Regex = Regex::new(r"^\+?[0-9]+$").expect("valid regex");
    static ref SEPARATORS: Regex = Regex::new(r"[\s\-.()]").expect("valid regex");
}

/// True when the whole string is digits with an optional leading `+`
pub fn looks_like_phone_number(text: &str) -> bool {
    PHONE_NUMBER.is_match(text)
}

/// Decides whether clipboard text is worth offering as a paste
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneDetector {
    /// Drop spaces, dashes, dots and parentheses before matching
    strip_separators: bool,
}

impl PhoneDetector {
    pub fn strict() -> Self {
        Self {
            strip_separators: false,
        }
    }

    pub fn lenient() -> Self {
        Self {
            strip_separators: true,
        }
    }

    pub fn new(strip_separators: bool) -> Self {
        Self { strip_separators }
    }

    pub fn looks_like_phone_number(&self, text: &str) -> bool {
        self.candidate(text).is_some()
    }

    /// The text to paste if `text` looks like a phone number.
    ///
    /// Strict mode returns the text unchanged; lenient mode returns it
    /// with separators removed.
    pub fn candidate(&self, text: &str) -> Option<String> {
        if self.strip_separators {
            let cleaned = SEPARATORS.replace_all(text.trim(), "");
            looks_like_phone_number(&cleaned).then(|| cleaned.into_owned())
        } else {
            looks_like_phone_number(text).then(|| text.to_string())
        }
    }
}
