//! Clipboard access
//!
//! Read-only, on demand. The platform clipboard is behind
//! [`ClipboardSource`] so front ends and tests can supply their own.

use crate::core::PhoneDetector;
use crate::error::WaResult;
use tracing::{debug, info, warn};

/// Anything that can hand back the current clipboard text
pub trait ClipboardSource: Send + Sync + std::fmt::Debug {
    /// `Ok(None)` when the clipboard holds no text
    fn read_text(&self) -> WaResult<Option<String>>;
}

/// System clipboard backed by `arboard`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&self) -> WaResult<Option<String>> {
        let mut clipboard = arboard::Clipboard::new()?;
        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Read the clipboard once and return the paste candidate, if any.
///
/// Read failures are logged and count as "nothing to offer".
pub fn check_clipboard(source: &dyn ClipboardSource, detector: &PhoneDetector) -> Option<String> {
    let text = match source.read_text() {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!("Clipboard holds no text");
            return None;
        }
        Err(e) => {
            warn!("Could not read clipboard: {}", e);
            return None;
        }
    };

    let candidate = detector.candidate(&text);
    if candidate.is_some() {
        info!("📋 Found number in clipboard, offering paste");
    }
    candidate
}
