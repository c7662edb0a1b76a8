//! Registration Service - the submission gateway
//!
//! Sends the accumulated wizard values to `POST /submit` and interprets the
//! response. The wizard's phase bookkeeping stays with the caller.

use stepform_domain::FormValueBag;

use crate::application::dto::{SubmissionOutcome, SubmitResponse};
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Path of the registration endpoint
pub const SUBMIT_PATH: &str = "/submit";

#[derive(Clone)]
pub struct RegistrationService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> RegistrationService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Submit the complete registration.
    ///
    /// `Ok(Rejected)` means the gateway answered with anything but "Success";
    /// `Err` means the request or its decoding failed.
    pub async fn submit(&self, values: &FormValueBag) -> Result<SubmissionOutcome, ServiceError> {
        tracing::debug!(fields = values.len(), "Submitting registration");

        let response: SubmitResponse = self.api.post(SUBMIT_PATH, values).await?;
        let outcome = SubmissionOutcome::from(response);

        match &outcome {
            SubmissionOutcome::Accepted => tracing::info!("Registration accepted"),
            SubmissionOutcome::Rejected { message } => {
                tracing::warn!(?message, "Registration rejected by gateway")
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use mockall::predicate::*;
    use serde_json::json;
    use std::sync::Arc;
    use stepform_domain::fields;

    fn service(raw: MockRawApiPort) -> RegistrationService<Api> {
        RegistrationService::new(Api::new(Arc::new(raw)))
    }

    fn bag() -> FormValueBag {
        FormValueBag::new()
            .with(fields::EMAIL_ID, "a@b.com")
            .with(fields::ACCEPT_TERMS, true)
    }

    #[tokio::test]
    async fn posts_the_flat_bag_to_submit() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .with(
                eq(SUBMIT_PATH),
                eq(json!({ "emailId": "a@b.com", "acceptTermsAndCondition": true })),
            )
            .times(1)
            .returning(|_, _| Ok(json!({ "message": "Success" })));

        let outcome = service(raw).submit(&bag()).await.unwrap();
        assert_eq!(outcome, SubmissionOutcome::Accepted);
    }

    #[tokio::test]
    async fn other_messages_are_rejections() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({ "message": "Email already registered" })));

        let outcome = service(raw).submit(&bag()).await.unwrap();
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                message: Some("Email already registered".into())
            }
        );
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(ApiError::RequestFailed("timed out".into())));

        let err = service(raw).submit(&bag()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Api(ApiError::RequestFailed(_))
        ));
    }

    #[tokio::test]
    async fn http_errors_propagate() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Err(ApiError::HttpError {
                status: 500,
                message: "boom".into(),
            })
        });

        let err = service(raw).submit(&bag()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Api(ApiError::HttpError { status: 500, .. })
        ));
    }
}
