//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific operations
//! needed by the UI layer. It abstracts the Platform DI container so that
//! views don't depend on infrastructure types.

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `crate::state`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    /// Log an info message
    fn log_info(&self, msg: &str);

    /// Log an error message
    fn log_error(&self, msg: &str);

    /// Log a debug message
    fn log_debug(&self, msg: &str);

    /// Log a warning message
    fn log_warn(&self, msg: &str);

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}
