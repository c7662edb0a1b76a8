pub mod http_client;
pub mod platform;

pub use http_client::{ApiAdapter, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};
