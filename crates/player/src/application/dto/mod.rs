//! Data transfer objects for the two remote endpoints

pub mod posts;
pub mod registration;

pub use posts::{PostId, PostRecord, PostsResponse, DEFAULT_AVATAR_URL, DEFAULT_IMAGE_URL};
pub use registration::{SubmissionOutcome, SubmitResponse, SUCCESS_MESSAGE};
