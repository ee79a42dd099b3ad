//! Deep link construction for the messaging service

use crate::error::{WaError, WaResult};

/// Base of the click-to-chat deep link
pub const DEFAULT_LINK_BASE: &str = "https://wa.me";

/// Characters allowed unencoded in a URL path segment (RFC 3986 pchar,
/// minus percent-escapes)
fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@".contains(c)
}

/// Check that `base` is an absolute http(s) URL without query or fragment
pub fn validate_base(base: &str) -> WaResult<()> {
    let rest = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"))
        .ok_or_else(|| WaError::InvalidUrl(format!("'{}' is not an http(s) URL", base)))?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() || rest.contains(['?', '#', ' ']) {
        return Err(WaError::InvalidUrl(format!(
            "'{}' is not a usable link base",
            base
        )));
    }
    Ok(())
}

/// Build `<base>/<number>`.
///
/// The number is not percent-encoded: any character outside the path
/// segment set makes construction fail.
pub fn build_deep_link(base: &str, number: &str) -> WaResult<String> {
    validate_base(base)?;

    if let Some(bad) = number.chars().find(|c| !is_path_char(*c)) {
        return Err(WaError::InvalidUrl(format!(
            "number '{}' contains character {:?} not allowed in a URL path",
            number, bad
        )));
    }

    Ok(format!("{}/{}", base.trim_end_matches('/'), number))
}
