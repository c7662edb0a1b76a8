//! Wire types for `POST /submit`

use serde::{Deserialize, Serialize};

/// The literal `message` the gateway returns for an accepted registration
pub const SUCCESS_MESSAGE: &str = "Success";

/// Response body of the submit endpoint
///
/// Only `message` is inspected; other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.message.as_deref() == Some(SUCCESS_MESSAGE)
    }
}

/// How the gateway judged a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    /// The gateway answered, but not with "Success"
    Rejected { message: Option<String> },
}

impl From<SubmitResponse> for SubmissionOutcome {
    fn from(response: SubmitResponse) -> Self {
        if response.is_success() {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected {
                message: response.message,
            }
        }
    }
}
