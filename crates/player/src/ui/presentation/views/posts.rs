//! Posts listing view
//!
//! Fetches once on mount. Failures are logged and leave the list empty.

use dioxus::prelude::*;

use crate::application::dto::PostRecord;
use crate::presentation::services::use_posts_service;
use crate::use_platform;

#[component]
pub fn PostsView() -> Element {
    let posts_service = use_posts_service();
    let platform = use_platform();
    let mut posts: Signal<Vec<PostRecord>> = use_signal(Vec::new);

    use_effect(move || {
        let svc = posts_service.clone();
        let platform = platform.clone();
        spawn(async move {
            match svc.list_posts().await {
                Ok(records) => posts.set(records),
                Err(e) => platform.log_error(&format!("Error fetching posts: {}", e)),
            }
        });
    });

    rsx! {
        div {
            class: "posts-page",
            h1 { class: "posts-title", "Posts" }
            div {
                class: "posts-grid",
                for card in post_cards(&posts.read()) {
                    PostCard { key: "{card.key}", card }
                }
            }
        }
    }
}

/// What one card shows, placeholders already applied
#[derive(Debug, Clone, PartialEq)]
pub struct PostCardModel {
    pub key: String,
    pub image: String,
    pub avatar: String,
    pub author: String,
    pub writeup: String,
}

impl From<&PostRecord> for PostCardModel {
    fn from(post: &PostRecord) -> Self {
        Self {
            key: post.id.to_string(),
            image: post.image_url().to_string(),
            avatar: post.avatar_url().to_string(),
            author: post.author_name(),
            writeup: post.writeup.clone(),
        }
    }
}

/// One card per record, in response order
pub fn post_cards(posts: &[PostRecord]) -> Vec<PostCardModel> {
    posts.iter().map(PostCardModel::from).collect()
}

#[component]
fn PostCard(card: PostCardModel) -> Element {
    rsx! {
        article {
            class: "post-card",
            img {
                class: "post-image",
                src: "{card.image}",
                alt: "{card.writeup}",
            }
            div {
                class: "post-body",
                div {
                    class: "post-author",
                    img {
                        class: "post-avatar",
                        src: "{card.avatar}",
                        alt: "{card.author}",
                    }
                    h2 { "{card.author}" }
                }
                p { class: "post-writeup", "{card.writeup}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::PostsResponse;
    use serde_json::json;

    fn records(body: serde_json::Value) -> Vec<PostRecord> {
        serde_json::from_value::<PostsResponse>(body).unwrap().data
    }

    #[test]
    fn empty_listing_has_no_cards() {
        assert!(post_cards(&records(json!({ "data": [] }))).is_empty());
    }

    #[test]
    fn missing_images_fall_back_to_placeholders() {
        let cards = post_cards(&records(json!({
            "data": [{ "id": 7, "firstName": "Jane", "lastName": "Doe", "writeup": "Hello" }]
        })));

        assert_eq!(
            cards,
            vec![PostCardModel {
                key: "7".into(),
                image: "default_image_url".into(),
                avatar: "default_avatar_url".into(),
                author: "Jane Doe".into(),
                writeup: "Hello".into(),
            }]
        );
    }

    #[test]
    fn cards_keep_response_order() {
        let cards = post_cards(&records(json!({
            "data": [
                { "id": "b", "firstName": "Raj", "writeup": "second",
                  "image": "https://img/b.png" },
                { "id": 1, "firstName": "Ana", "writeup": "first" }
            ]
        })));

        let keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "1"]);
        assert_eq!(cards[0].image, "https://img/b.png");
        assert_eq!(cards[0].author, "Raj");
    }
}
