//! Mock link opener for testing
//!
//! Records every URL it is asked to open.

use std::sync::{Arc, Mutex};
use waopen::error::{WaError, WaResult};
use waopen::launcher::LinkOpener;

#[derive(Debug)]
pub struct MockOpener {
    /// All URLs that were "opened"
    pub opened: Arc<Mutex<Vec<String>>>,
    /// Simulate a platform with no handler for the URL
    pub unavailable: Arc<Mutex<bool>>,
}

impl MockOpener {
    pub fn new() -> Self {
        Self {
            opened: Arc::new(Mutex::new(Vec::new())),
            unavailable: Arc::new(Mutex::new(false)),
        }
    }

    pub fn get_opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }
}

impl Default for MockOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkOpener for MockOpener {
    fn open_url(&self, url: &str) -> WaResult<()> {
        if *self.unavailable.lock().unwrap() {
            return Err(WaError::AppUnavailable {
                url: url.to_string(),
                reason: "mock: no handler".to_string(),
            });
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
