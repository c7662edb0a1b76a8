//! Step 3: phone number and terms, then final submission

use dioxus::prelude::*;
use stepform_domain::{FormValueBag, WizardStep};

use super::{use_step_draft, StepFields};

#[component]
pub fn ContactStep(
    defaults: FormValueBag,
    submitting: bool,
    on_submit: EventHandler<FormValueBag>,
    on_back: EventHandler<()>,
) -> Element {
    let mut draft = use_step_draft(WizardStep::Contact, &defaults);

    rsx! {
        div {
            class: "step-form",
            StepFields { draft }

            div {
                class: "step-actions",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: submitting,
                    onclick: move |_| on_back.call(()),
                    "← Back"
                }
                div {
                    class: "step-actions-group",
                    // Last step: there is no next
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: true,
                        "Save and Next →"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: submitting,
                        onclick: move |_| {
                            if let Some(values) = draft.commit() {
                                on_submit.call(values);
                            }
                        },
                        if submitting { "Submitting…" } else { "Save" }
                    }
                }
            }
        }
    }
}
