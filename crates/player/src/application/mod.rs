//! Application layer: typed API wrapper, DTOs, and services.

pub mod api;
pub mod dto;
pub mod error;
pub mod services;

pub use error::ServiceError;
