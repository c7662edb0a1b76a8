//! Step 2: name and address

use dioxus::prelude::*;
use stepform_domain::{FormValueBag, WizardStep};

use super::{use_step_draft, StepFields};

#[component]
pub fn ProfileStep(
    defaults: FormValueBag,
    on_save: EventHandler<FormValueBag>,
    on_next: EventHandler<FormValueBag>,
    on_back: EventHandler<()>,
) -> Element {
    let mut draft = use_step_draft(WizardStep::Profile, &defaults);

    rsx! {
        div {
            class: "step-form",
            StepFields { draft }

            div {
                class: "step-actions",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| on_back.call(()),
                    "← Back"
                }
                div {
                    class: "step-actions-group",
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: move |_| {
                            if let Some(values) = draft.commit() {
                                on_save.call(values);
                            }
                        },
                        "Save"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            if let Some(values) = draft.commit() {
                                on_next.call(values);
                            }
                        },
                        "Save and Next →"
                    }
                }
            }
        }
    }
}
