//! Desktop platform implementations

use crate::ports::outbound::platform::{DocumentProvider, LogProvider};
use crate::state::Platform;

/// Desktop log provider using tracing
#[derive(Clone, Default)]
pub struct DesktopLogProvider;

impl LogProvider for DesktopLogProvider {
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

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is fixed by the runner's desktop config
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(DesktopLogProvider, DesktopDocumentProvider)
}
