//! Registration wizard route handler

use crate::presentation::state::WizardSession;
use crate::use_platform;
use dioxus::prelude::*;

/// Wizard route - the wizard's values live only as long as this route is mounted
#[component]
pub fn WizardRoute() -> Element {
    let platform = use_platform();
    use_context_provider(WizardSession::new);

    // Set page title
    use_effect(move || {
        platform.set_page_title("Get started");
    });

    rsx! {
        crate::presentation::views::wizard::WizardView {}
    }
}
