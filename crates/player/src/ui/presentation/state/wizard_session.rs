//! Wizard session state
//!
//! Wraps the domain [`Wizard`] in a Signal so the mounted step form re-renders
//! on every transition.

use dioxus::prelude::*;
use stepform_domain::{DomainError, FormValueBag, Wizard, WizardStatus, WizardStep};

/// Wizard state shared by the wizard view and its step forms
#[derive(Clone, Copy)]
pub struct WizardSession {
    pub wizard: Signal<Wizard>,
}

impl WizardSession {
    /// Create a new session on the first step with no values
    pub fn new() -> Self {
        Self {
            wizard: Signal::new(Wizard::new()),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.wizard.read().current_step()
    }

    /// Committed values, used as step form defaults
    pub fn values(&self) -> FormValueBag {
        self.wizard.read().values().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.wizard.read().is_submitting()
    }

    pub fn save(&mut self, partial: FormValueBag) -> Result<(), DomainError> {
        self.wizard.write().save(partial)
    }

    pub fn advance(&mut self, partial: FormValueBag) -> Result<WizardStep, DomainError> {
        self.wizard.write().advance(partial)
    }

    pub fn retreat(&mut self) -> Result<WizardStep, DomainError> {
        self.wizard.write().retreat()
    }

    pub fn begin_submission(
        &mut self,
        partial: FormValueBag,
    ) -> Result<FormValueBag, DomainError> {
        self.wizard.write().begin_submission(partial)
    }

    pub fn finish_submission(&mut self, accepted: bool) -> Result<WizardStatus, DomainError> {
        self.wizard.write().finish_submission(accepted)
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
