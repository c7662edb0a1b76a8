//! Registration wizard view
//!
//! Exactly one step form is mounted at a time, keyed by step so that a
//! transition remounts it with the committed values as defaults. Edits that
//! were never saved are dropped on the way.

use dioxus::prelude::*;
use stepform_domain::{validate, FormValue, FormValueBag, ValidationErrors, WizardStep};

use crate::application::dto::SubmissionOutcome;
use crate::application::ServiceError;
use crate::ports::outbound::PlatformPort;
use crate::presentation::components::common::FormField;
use crate::presentation::components::{SideInfo, Stepper};
use crate::presentation::services::use_registration_service;
use crate::presentation::state::WizardSession;
use crate::{use_platform, use_shell, Route};

mod account_step;
mod contact_step;
mod profile_step;

pub use account_step::AccountStep;
pub use contact_step::ContactStep;
pub use profile_step::ProfileStep;

// =============================================================================
// Step draft
// =============================================================================

/// Uncommitted input of the mounted step plus its last validation result
#[derive(Clone, Copy, PartialEq)]
pub struct StepDraft {
    step: WizardStep,
    values: Signal<FormValueBag>,
    errors: Signal<ValidationErrors>,
}

/// Create the draft for `step`, seeded with the step's own committed values
pub fn use_step_draft(step: WizardStep, defaults: &FormValueBag) -> StepDraft {
    let values = use_signal(|| {
        step.schema()
            .field_names()
            .filter_map(|name| defaults.get(name).map(|v| (name.to_string(), v.clone())))
            .collect::<FormValueBag>()
    });
    let errors = use_signal(ValidationErrors::new);

    StepDraft {
        step,
        values,
        errors,
    }
}

impl StepDraft {
    pub fn set(&mut self, field: &str, value: FormValue) {
        self.values.write().insert(field, value);

        // Once errors are showing, keep them in sync with the input
        if !self.errors.read().is_empty() {
            self.commit();
        }
    }

    /// Validate the whole step; on success returns exactly the step's fields
    pub fn commit(&mut self) -> Option<FormValueBag> {
        let result = validate(&self.step.schema(), &self.values.read());
        match result {
            Ok(committed) => {
                self.errors.set(ValidationErrors::new());
                Some(committed)
            }
            Err(errors) => {
                tracing::debug!(step = %self.step, failed = errors.len(), "Step validation failed");
                self.errors.set(errors);
                None
            }
        }
    }
}

/// Renders every field of the draft's step from its schema
#[component]
pub fn StepFields(draft: StepDraft) -> Element {
    let mut draft = draft;
    let schema = draft.step.schema();
    let values = draft.values.read().clone();
    let errors = draft.errors.read().clone();

    let rows = schema.fields.into_iter().map(|field| {
        let name = field.name;
        let value = values
            .get(name)
            .cloned()
            .unwrap_or_else(|| field.empty_value());
        let error = errors.get(name).map(str::to_string);

        rsx! {
            FormField {
                key: "{name}",
                field,
                value,
                error,
                on_change: move |value| draft.set(name, value),
            }
        }
    });

    rsx! {
        div { class: "step-fields", {rows} }
    }
}

// =============================================================================
// Submission outcome
// =============================================================================

/// Log the gateway's answer and pick where to go next.
///
/// Only an accepted registration leaves the wizard; anything else keeps the
/// user on the last step with nothing but a diagnostic log entry.
pub fn route_after_submission(
    result: &Result<SubmissionOutcome, ServiceError>,
    platform: &dyn PlatformPort,
) -> Option<Route> {
    match result {
        Ok(SubmissionOutcome::Accepted) => Some(Route::PostsRoute {}),
        Ok(SubmissionOutcome::Rejected { message }) => {
            platform.log_warn(&format!(
                "Submission rejected: {}",
                message.as_deref().unwrap_or("<no message>")
            ));
            None
        }
        Err(e) => {
            platform.log_error(&format!("Error submitting form: {}", e));
            None
        }
    }
}

// =============================================================================
// Wizard view
// =============================================================================

#[component]
pub fn WizardView() -> Element {
    let mut session = use_context::<WizardSession>();
    let registration = use_registration_service();
    let platform = use_platform();
    let navigator = use_navigator();
    let shell = use_shell();

    let step = session.current_step();
    let defaults = session.values();
    let submitting = session.is_submitting();

    let log = platform.clone();
    let on_save = move |partial: FormValueBag| {
        if let Err(e) = session.save(partial) {
            log.log_warn(&format!("Save ignored: {}", e));
        }
    };

    let log = platform.clone();
    let on_next = move |partial: FormValueBag| {
        if let Err(e) = session.advance(partial) {
            log.log_warn(&format!("Advance ignored: {}", e));
        }
    };

    let log = platform.clone();
    let on_back = move |_: ()| {
        if let Err(e) = session.retreat() {
            log.log_warn(&format!("Back ignored: {}", e));
        }
    };

    let on_submit = move |partial: FormValueBag| {
        let bag = match session.begin_submission(partial) {
            Ok(bag) => bag,
            Err(e) => {
                platform.log_warn(&format!("Submission ignored: {}", e));
                return;
            }
        };

        let registration = registration.clone();
        let platform = platform.clone();
        spawn(async move {
            let result = registration.submit(&bag).await;
            let next = route_after_submission(&result, &*platform);

            if let Err(e) = session.finish_submission(next.is_some()) {
                platform.log_error(&format!("Submission state lost: {}", e));
                return;
            }
            if let Some(route) = next {
                navigator.push(route);
            }
        });
    };

    rsx! {
        div {
            class: "wizard-page",

            if shell.shows_side_info() {
                SideInfo {}
            }

            main {
                class: "wizard-main",
                h1 { class: "wizard-title", "Let’s get you started" }
                p { class: "wizard-subtitle", "Enter the details to get going" }

                Stepper { active: step }

                {
                    match step {
                        WizardStep::Account => {
                            let key = "account";
                            rsx! {
                                AccountStep {
                                    key: "{key}",
                                    defaults,
                                    on_save,
                                    on_next,
                                }
                            }
                        }
                        WizardStep::Profile => {
                            let key = "profile";
                            rsx! {
                                ProfileStep {
                                    key: "{key}",
                                    defaults,
                                    on_save,
                                    on_next,
                                    on_back,
                                }
                            }
                        }
                        WizardStep::Contact => {
                            let key = "contact";
                            rsx! {
                                ContactStep {
                                    key: "{key}",
                                    defaults,
                                    submitting,
                                    on_submit,
                                    on_back,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
