//! Step 1: email and password

use dioxus::prelude::*;
use stepform_domain::{FormValueBag, WizardStep};

use super::{use_step_draft, StepFields};

#[component]
pub fn AccountStep(
    defaults: FormValueBag,
    on_save: EventHandler<FormValueBag>,
    on_next: EventHandler<FormValueBag>,
) -> Element {
    let mut draft = use_step_draft(WizardStep::Account, &defaults);

    rsx! {
        div {
            class: "step-form",
            StepFields { draft }

            div {
                class: "step-actions step-actions-end",
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
