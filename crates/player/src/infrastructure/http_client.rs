//! HTTP adapter implementing [`RawApiPort`]
//!
//! Desktop uses `reqwest` with a request timeout; the browser build uses
//! `gloo-net` and relies on the browser's own timeouts.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Default remote base URL
pub const DEFAULT_API_BASE_URL: &str = "https://codebuddy.review";

/// Default request timeout (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// =============================================================================
// Desktop (reqwest)
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use std::time::Duration;

    use reqwest::{Client, Response};

    use super::*;

    #[derive(Clone)]
    pub struct ApiAdapter {
        client: Client,
        base_url: String,
    }

    impl ApiAdapter {
        pub fn new(base_url: &str, timeout_ms: u64) -> Self {
            let client = Client::builder()
                .timeout(Duration::from_millis(timeout_ms))
                .build()
                .unwrap_or_else(|_| Client::new());

            Self {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        async fn read_json(response: Response) -> Result<Value, ApiError> {
            let status = response.status();
            if !status.is_success() {
                let message = response
                    .text()
                    .await
                    .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
                return Err(ApiError::HttpError {
                    status: status.as_u16(),
                    message,
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let url = join_url(&self.base_url, path);
            tracing::debug!(%url, "GET");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            Self::read_json(response).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let url = join_url(&self.base_url, path);
            tracing::debug!(%url, "POST");

            let response = self
                .client
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            Self::read_json(response).await
        }
    }
}

// =============================================================================
// Browser (gloo-net)
// =============================================================================

#[cfg(target_arch = "wasm32")]
mod wasm {
    use gloo_net::http::{Request, Response};

    use super::*;

    #[derive(Clone)]
    pub struct ApiAdapter {
        base_url: String,
    }

    impl ApiAdapter {
        /// `timeout_ms` is accepted for parity with desktop; fetch has no per-request timeout
        pub fn new(base_url: &str, _timeout_ms: u64) -> Self {
            Self {
                base_url: base_url.trim_end_matches('/').to_string(),
            }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        async fn read_json(response: Response) -> Result<Value, ApiError> {
            if !response.ok() {
                let message = response
                    .text()
                    .await
                    .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
                return Err(ApiError::HttpError {
                    status: response.status(),
                    message,
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let url = join_url(&self.base_url, path);
            tracing::debug!(%url, "GET");

            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            Self::read_json(response).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let url = join_url(&self.base_url, path);
            tracing::debug!(%url, "POST");

            let response = Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            Self::read_json(response).await
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;
