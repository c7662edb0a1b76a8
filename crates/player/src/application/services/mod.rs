//! Application services
//!
//! Both services are REST-based and generic over `ApiPort`.

pub mod posts_service;
pub mod registration_service;

pub use posts_service::{PostsService, POSTS_PATH};
pub use registration_service::{RegistrationService, SUBMIT_PATH};
