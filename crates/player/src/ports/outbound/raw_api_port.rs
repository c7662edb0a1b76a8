//! Raw API Port - Object-safe HTTP boundary
//!
//! The `ApiPort` trait is generic over response/request types which makes it
//! not object-safe. The UI/composition root needs an object-safe abstraction that can
//! be stored behind `Arc<dyn ...>`.
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters.
//! The application layer provides a typed wrapper that implements `ApiPort` on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// `path` is relative to the configured base URL, e.g. `/posts`
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
