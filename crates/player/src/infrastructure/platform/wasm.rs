//! WASM platform implementations
//!
//! Logging goes through `tracing`, which `tracing-wasm` routes to the browser
//! console; the document title is set through `web-sys`.

use crate::ports::outbound::platform::{DocumentProvider, LogProvider};
use crate::state::Platform;

/// Browser log provider using tracing
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// Browser document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmLogProvider, WasmDocumentProvider)
}
