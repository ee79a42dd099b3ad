//! Opener that only logs the URL

use super::LinkOpener;
use crate::error::WaResult;
use tracing::info;

#[derive(Debug, Default)]
pub struct DryRunOpener;

impl DryRunOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for DryRunOpener {
    fn open_url(&self, url: &str) -> WaResult<()> {
        info!("🧪 Dry run, not opening: {}", url);
        Ok(())
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}
