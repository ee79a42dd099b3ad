//! Platform URL handler via the `open` crate

use super::LinkOpener;
use crate::error::{WaError, WaResult};
use tracing::debug;

#[derive(Debug)]
pub struct SystemOpener;

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemOpener {
    fn open_url(&self, url: &str) -> WaResult<()> {
        debug!("System opening: {}", url);

        open::that(url).map_err(|e| WaError::AppUnavailable {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn name(&self) -> &str {
        "system"
    }
}
