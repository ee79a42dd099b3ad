//! Deep Link Launcher
//!
//! Normalized number in, deep link handed to the platform out. The
//! platform side sits behind [`LinkOpener`] so it can be swapped for a
//! dry run or a mock.

use crate::config::Config;
use crate::core::{build_deep_link, DEFAULT_LINK_BASE};
use crate::error::{WaError, WaResult};
use std::sync::Arc;
use tracing::{info, warn};

pub mod dry_run;
pub mod system;

/// Trait for anything that can hand a URL to an external application
pub trait LinkOpener: Send + Sync + std::fmt::Debug {
    /// Ask the platform to open `url`. Does not wait for the target app.
    fn open_url(&self, url: &str) -> WaResult<()>;

    /// Get the opener name
    fn name(&self) -> &str;
}

/// Successful launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launched {
    pub url: String,
}

pub type LaunchResult = WaResult<Launched>;

/// Builds the deep link for a normalized number and opens it
#[derive(Debug, Clone)]
pub struct DeepLinkOpener {
    base: String,
    opener: Arc<dyn LinkOpener>,
}

impl DeepLinkOpener {
    pub fn new(base: impl Into<String>, opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            base: base.into(),
            opener,
        }
    }

    pub fn with_default_base(opener: Arc<dyn LinkOpener>) -> Self {
        Self::new(DEFAULT_LINK_BASE, opener)
    }

    pub fn opener_name(&self) -> &str {
        self.opener.name()
    }

    /// Open the chat for an already normalized number.
    ///
    /// Failures are logged and returned; nothing is retried.
    pub fn open(&self, normalized: &str) -> LaunchResult {
        let url = build_deep_link(&self.base, normalized).inspect_err(|e| {
            warn!("❌ Cannot build deep link: {}", e);
        })?;

        info!("🔗 Opening {} via {}", url, self.opener.name());
        if let Err(e) = self.opener.open_url(&url) {
            warn!("❌ Cannot open deep link: {}", e);
            return Err(e);
        }

        Ok(Launched { url })
    }
}

/// Factory for the configured opener
pub fn create_opener(config: &Config) -> Arc<dyn LinkOpener> {
    match config.opener.as_str() {
        "system" => Arc::new(system::SystemOpener::new()),
        "dry-run" | "dry_run" => Arc::new(dry_run::DryRunOpener::new()),
        other => {
            warn!("Unknown opener '{}', falling back to system", other);
            Arc::new(system::SystemOpener::new())
        }
    }
}

/// Factory for a fully configured launcher
pub fn create_launcher(config: &Config) -> WaResult<DeepLinkOpener> {
    crate::core::deep_link::validate_base(&config.link_base)
        .map_err(|e| WaError::Config(e.to_string()))?;
    Ok(DeepLinkOpener::new(
        config.link_base.clone(),
        create_opener(config),
    ))
}
