//! Typed HTTP port
//!
//! `ApiPort` is generic over request/response types and therefore not
//! object-safe. Adapters implement [`RawApiPort`](super::RawApiPort) instead;
//! the application layer's `Api` wrapper provides this interface on top of it.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors surfaced by HTTP adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    /// GET `path` and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    /// POST `body` as JSON to `path` and decode the JSON response
    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;
}
