//! Step progress header

use dioxus::prelude::*;
use stepform_domain::WizardStep;

/// Shows every step label with the active one highlighted and earlier ones marked done
#[component]
pub fn Stepper(active: WizardStep) -> Element {
    rsx! {
        ol {
            class: "stepper",
            for step in WizardStep::ALL {
                li {
                    key: "{step.index()}",
                    class: step_class(step, active),
                    span { class: "stepper-index", "{step.index() + 1}" }
                    span { class: "stepper-label", "{step.label()}" }
                }
            }
        }
    }
}

fn step_class(step: WizardStep, active: WizardStep) -> &'static str {
    if step == active {
        "stepper-step active"
    } else if step < active {
        "stepper-step done"
    } else {
        "stepper-step"
    }
}
