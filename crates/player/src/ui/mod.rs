use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Stylesheet shared by both shells
pub const APP_CSS: &str = include_str!("../../assets/css/app.css");

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    /// Whether the marketing side panel fits next to the form
    pub fn shows_side_info(self) -> bool {
        matches!(self, ShellKind::Desktop)
    }
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook to access the active shell from Dioxus context
pub fn use_shell() -> ShellKind {
    use_context::<ShellKind>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let shell = use_context::<ShellKind>();

    rsx! {
        // Desktop receives the stylesheet through the window's custom head
        if cfg!(target_arch = "wasm32") {
            style { {APP_CSS} }
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Router::<routes::Route> {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        Router::<routes::Route> {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-mobile",
            {children}
        }
    }
}
