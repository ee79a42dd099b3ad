//! Main application state for the waopen GUI
//!
//! Contains the WaOpenApp struct and initialization logic.

use iced::Task;
use std::sync::Arc;
use tracing::{info, warn};

use crate::clipboard::{ClipboardSource, SystemClipboard};
use crate::config::Config;
use crate::core::{PhoneDetector, PhoneNormalizer};
use crate::launcher::{self, DeepLinkOpener};

use super::messages::Message;
use super::state::LaunchStatus;

/// Main application state
pub struct WaOpenApp {
    /// Phone number field contents
    pub(crate) input: String,
    /// Show the "Paste from Clipboard" button
    pub(crate) should_prompt_for_paste: bool,
    /// Cursor is over the phone number field
    pub(crate) field_hovered: bool,
    /// Clipboard checks scheduled by taps on the field
    pub(crate) clipboard_checks: usize,
    /// Result of the last open attempt
    pub(crate) status: LaunchStatus,
    pub(crate) normalizer: PhoneNormalizer,
    pub(crate) detector: PhoneDetector,
    pub(crate) launcher: DeepLinkOpener,
    pub(crate) clipboard: Arc<dyn ClipboardSource>,
}

impl WaOpenApp {
    /// Create a new WaOpenApp from the user's config
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_else(|e| {
            warn!("⚠️ Could not load config, using defaults: {}", e);
            Config::default()
        });

        let normalizer = config.normalizer().unwrap_or_else(|e| {
            warn!("⚠️ {}; using default country code", e);
            PhoneNormalizer::default()
        });
        let launcher = launcher::create_launcher(&config).unwrap_or_else(|e| {
            warn!("⚠️ {}; using default link base", e);
            DeepLinkOpener::with_default_base(launcher::create_opener(&config))
        });

        info!(
            "🚀 waopen app initialized (country code {}, opener {})",
            normalizer.country_code(),
            launcher.opener_name()
        );

        let app = Self::with_parts(
            normalizer,
            config.detector(),
            launcher,
            Arc::new(SystemClipboard::new()),
        );
        (app, Task::none())
    }

    /// Build the app from explicit parts
    pub fn with_parts(
        normalizer: PhoneNormalizer,
        detector: PhoneDetector,
        launcher: DeepLinkOpener,
        clipboard: Arc<dyn ClipboardSource>,
    ) -> Self {
        Self {
            input: String::new(),
            should_prompt_for_paste: false,
            field_hovered: false,
            clipboard_checks: 0,
            status: LaunchStatus::Idle,
            normalizer,
            detector,
            launcher,
            clipboard,
        }
    }

    /// Application title
    pub fn title(&self) -> String {
        "Open in WhatsApp".to_string()
    }

    /// Application theme
    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_paste_prompt_visible(&self) -> bool {
        self.should_prompt_for_paste
    }

    pub fn status(&self) -> &LaunchStatus {
        &self.status
    }

    pub fn clipboard_checks_scheduled(&self) -> usize {
        self.clipboard_checks
    }

    pub fn launcher(&self) -> &DeepLinkOpener {
        &self.launcher
    }
}
