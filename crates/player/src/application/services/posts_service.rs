//! Posts Service - fetches the listing shown after registration

use crate::application::dto::{PostRecord, PostsResponse};
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Path of the listing endpoint
pub const POSTS_PATH: &str = "/posts";

#[derive(Clone)]
pub struct PostsService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> PostsService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch every post. No paging.
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, ServiceError> {
        let response: PostsResponse = self.api.get(POSTS_PATH).await?;
        tracing::debug!(count = response.data.len(), "Fetched posts");
        Ok(response.data)
    }
}
