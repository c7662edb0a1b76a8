//! Typed API wrapper for application services.
//!
//! The composition root stores an object-safe port implementation so UI and
//! services don't depend on adapter types. `Api` wraps that
//! `Arc<dyn RawApiPort>` and implements the typed `ApiPort` interface via
//! serde_json conversions.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
