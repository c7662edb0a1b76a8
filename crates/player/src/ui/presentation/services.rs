//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use `use_context` to access services without depending
//! on infrastructure implementations.
use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{PostsService, RegistrationService};
use crate::ports::outbound::ApiPort;

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub registration: Arc<RegistrationService<A>>,
    pub posts: Arc<PostsService<A>>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// Create all services over the given REST API port
    pub fn new(api: A) -> Self {
        Self {
            registration: Arc::new(RegistrationService::new(api.clone())),
            posts: Arc::new(PostsService::new(api)),
        }
    }
}

/// Hook to access the RegistrationService from context
pub fn use_registration_service() -> Arc<RegistrationService<Api>> {
    let services = use_context::<UiServices>();
    services.registration.clone()
}

/// Hook to access the PostsService from context
pub fn use_posts_service() -> Arc<PostsService<Api>> {
    let services = use_context::<UiServices>();
    services.posts.clone()
}
