//! Wire types for `GET /posts`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when a post has no image
pub const DEFAULT_IMAGE_URL: &str = "default_image_url";

/// Shown when a post has no author avatar
pub const DEFAULT_AVATAR_URL: &str = "default_avatar_url";

/// Post identity; the listing endpoint uses either numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: PostId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub writeup: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl PostRecord {
    /// Image URI, or the placeholder when absent or empty
    pub fn image_url(&self) -> &str {
        non_empty(&self.image).unwrap_or(DEFAULT_IMAGE_URL)
    }

    /// Avatar URI, or the placeholder when absent or empty
    pub fn avatar_url(&self) -> &str {
        non_empty(&self.avatar).unwrap_or(DEFAULT_AVATAR_URL)
    }

    /// "firstName lastName", trimmed when the last name is empty
    pub fn author_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Response body of the posts endpoint; a missing `data` is an empty list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub data: Vec<PostRecord>,
}
