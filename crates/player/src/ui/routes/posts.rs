//! Posts listing route handler

use crate::use_platform;
use dioxus::prelude::*;

/// Posts route
#[component]
pub fn PostsRoute() -> Element {
    let platform = use_platform();

    // Set page title
    use_effect(move || {
        platform.set_page_title("Posts");
    });

    rsx! {
        crate::presentation::views::posts::PostsView {}
    }
}
