//! Service layer error types

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport or decoding failure talking to the remote endpoint
    #[error(transparent)]
    Api(#[from] ApiError),
}
