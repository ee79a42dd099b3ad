//! Mock clipboard with settable contents

use std::sync::{Arc, Mutex};
use waopen::clipboard::ClipboardSource;
use waopen::error::WaResult;

#[derive(Debug, Default)]
pub struct MockClipboard {
    pub contents: Arc<Mutex<Option<String>>>,
    /// Number of reads performed
    pub reads: Arc<Mutex<usize>>,
}

impl MockClipboard {
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(Some(text));
        clipboard
    }

    pub fn set(&self, text: Option<&str>) {
        *self.contents.lock().unwrap() = text.map(str::to_string);
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl ClipboardSource for MockClipboard {
    fn read_text(&self) -> WaResult<Option<String>> {
        *self.reads.lock().unwrap() += 1;
        Ok(self.contents.lock().unwrap().clone())
    }
}
