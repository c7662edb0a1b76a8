//! Recording platform providers for tests
//!
//! Clones share their buffers, so a test can keep one handle and pass another
//! into `Platform::new`.

use std::sync::{Arc, Mutex};

use crate::ports::outbound::{DocumentProvider, LogProvider};
use crate::state::Platform;

/// Log provider that records `(level, message)` pairs
#[derive(Clone, Default)]
pub struct MockLogProvider {
    entries: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockLogProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages logged at `level`
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| l == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    fn record(&self, level: &str, msg: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level.to_string(), msg.to_string()));
        }
    }
}

impl LogProvider for MockLogProvider {
    fn info(&self, msg: &str) {
        self.record("info", msg);
    }

    fn error(&self, msg: &str) {
        self.record("error", msg);
    }

    fn debug(&self, msg: &str) {
        self.record("debug", msg);
    }

    fn warn(&self, msg: &str) {
        self.record("warn", msg);
    }
}

/// Document provider that remembers the last page title
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<String> {
        self.title.lock().ok().and_then(|t| t.clone())
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut current) = self.title.lock() {
            *current = Some(title.to_string());
        }
    }
}

/// Platform backed by fresh recording providers
pub fn create_mock_platform() -> (Platform, MockLogProvider, MockDocumentProvider) {
    let log = MockLogProvider::new();
    let document = MockDocumentProvider::new();
    let platform = Platform::new(log.clone(), document.clone());
    (platform, log, document)
}
