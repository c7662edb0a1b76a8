//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` factory in platform/desktop.rs or platform/wasm.rs
//! - Injected into Dioxus context by the runner
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use crate::ports::outbound::{DocumentProvider, LogProvider, PlatformPort};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    log: Arc<dyn LogProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait LogProviderDyn: Send + Sync {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: LogProvider + Send + Sync> LogProviderDyn for T {
    fn info(&self, msg: &str) {
        LogProvider::info(self, msg)
    }
    fn error(&self, msg: &str) {
        LogProvider::error(self, msg)
    }
    fn debug(&self, msg: &str) {
        LogProvider::debug(self, msg)
    }
    fn warn(&self, msg: &str) {
        LogProvider::warn(self, msg)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<L, D>(log: L, document: D) -> Self
    where
        L: LogProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            log: Arc::new(log),
            document: Arc::new(document),
        }
    }
}

impl PlatformPort for Platform {
    fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    fn log_debug(&self, msg: &str) {
        self.log.debug(msg)
    }

    fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
