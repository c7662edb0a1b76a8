//! Marketing panel shown beside the wizard on wide screens

use dioxus::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    (
        "Quick and free sign-up",
        "Enter your email address to create an account.",
    ),
    (
        "Cross-platform solution",
        "Preview your newsletters on any device before sending them out.",
    ),
    (
        "Start sending emails",
        "Use our API or pick our pre-built templates.",
    ),
    (
        "Secure and reliable",
        "Your data is protected with industry-standard security measures.",
    ),
];

#[component]
pub fn SideInfo() -> Element {
    rsx! {
        aside {
            class: "side-info",
            for (title, blurb) in FEATURES.iter() {
                div {
                    key: "{title}",
                    class: "side-info-item",
                    h3 { "{title}" }
                    p { "{blurb}" }
                }
            }
        }
    }
}
