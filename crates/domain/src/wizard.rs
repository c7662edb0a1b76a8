//! Wizard aggregate - step index, committed values, and submission phase
//!
//! The wizard only ever receives values that already passed the issuing step's
//! validation; it owns navigation and accumulation, not rule checking.
//!
//! # Invariants
//!
//! - The step index moves by exactly one per transition
//! - Committed values accumulate monotonically; retreating never drops them
//! - At most one submission is in flight at a time

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::form::{FormValueBag, WizardStep};

/// Where the wizard is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "step", rename_all = "snake_case")]
pub enum WizardStatus {
    /// A step form is mounted and accepting input
    Editing(WizardStep),
    /// Final submission is in flight
    Submitting,
    /// The gateway accepted the registration
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    step: WizardStep,
    values: FormValueBag,
    status: WizardStatus,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Account,
            values: FormValueBag::new(),
            status: WizardStatus::Editing(WizardStep::Account),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Values committed so far, used as defaults by the mounted step form
    pub fn values(&self) -> &FormValueBag {
        &self.values
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == WizardStatus::Submitting
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Merge `partial` without moving. Empty partials are ignored.
    pub fn save(&mut self, partial: FormValueBag) -> Result<(), DomainError> {
        self.ensure_editing("save")?;
        if partial.is_empty() {
            return Ok(());
        }
        self.values.merge(partial);
        Ok(())
    }

    /// Merge `partial` and move to the next step.
    ///
    /// Fails without touching any state when already on the last step.
    pub fn advance(&mut self, partial: FormValueBag) -> Result<WizardStep, DomainError> {
        self.ensure_editing("advance")?;
        let next = self.step.next().ok_or_else(|| {
            DomainError::invalid_state_transition(format!(
                "cannot advance past the last step ({})",
                self.step
            ))
        })?;

        self.values.merge(partial);
        self.move_to(next);
        Ok(next)
    }

    /// Move to the previous step. Committed values are kept.
    pub fn retreat(&mut self) -> Result<WizardStep, DomainError> {
        self.ensure_editing("retreat")?;
        let previous = self.step.previous().ok_or_else(|| {
            DomainError::invalid_state_transition("cannot go back from the first step")
        })?;

        self.move_to(previous);
        Ok(previous)
    }

    /// Merge the final step's values and enter `Submitting`.
    ///
    /// Returns the complete bag to hand to the submission gateway. Rejected
    /// while another submission is outstanding or before the last step.
    pub fn begin_submission(
        &mut self,
        partial: FormValueBag,
    ) -> Result<FormValueBag, DomainError> {
        match self.status {
            WizardStatus::Submitting => {
                return Err(DomainError::invalid_state_transition(
                    "a submission is already in flight",
                ))
            }
            WizardStatus::Submitted => {
                return Err(DomainError::invalid_state_transition(
                    "registration was already submitted",
                ))
            }
            WizardStatus::Editing(step) if !step.is_last() => {
                return Err(DomainError::invalid_state_transition(format!(
                    "cannot submit from {}",
                    step
                )))
            }
            WizardStatus::Editing(_) => {}
        }

        self.values.merge(partial);
        self.status = WizardStatus::Submitting;
        Ok(self.values.clone())
    }

    /// Resolve the in-flight submission.
    ///
    /// A rejected submission returns to the last step with every value intact.
    pub fn finish_submission(&mut self, accepted: bool) -> Result<WizardStatus, DomainError> {
        if !self.is_submitting() {
            return Err(DomainError::invalid_state_transition(
                "no submission is in flight",
            ));
        }

        self.status = if accepted {
            WizardStatus::Submitted
        } else {
            WizardStatus::Editing(self.step)
        };
        Ok(self.status)
    }

    fn move_to(&mut self, step: WizardStep) {
        self.step = step;
        self.status = WizardStatus::Editing(step);
    }

    fn ensure_editing(&self, action: &str) -> Result<(), DomainError> {
        match self.status {
            WizardStatus::Editing(_) => Ok(()),
            other => Err(DomainError::invalid_state_transition(format!(
                "cannot {} while {:?}",
                action, other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{fields, validate};

    fn account() -> FormValueBag {
        FormValueBag::new()
            .with(fields::EMAIL_ID, "a@b.com")
            .with(fields::PASSWORD, "AAaa11!!")
    }

    fn profile() -> FormValueBag {
        FormValueBag::new()
            .with(fields::FIRST_NAME, "Jane")
            .with(fields::ADDRESS, "123 Main Street")
    }

    fn contact() -> FormValueBag {
        FormValueBag::new()
            .with(fields::COUNTRY_CODE, "+1")
            .with(fields::PHONE_NUMBER, "5551234567")
            .with(fields::ACCEPT_TERMS, true)
    }

    fn at_contact_step() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.advance(account()).unwrap();
        wizard.advance(profile()).unwrap();
        wizard
    }

    #[test]
    fn starts_empty_on_first_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.current_step(), WizardStep::Account);
        assert!(wizard.values().is_empty());
        assert_eq!(wizard.status(), WizardStatus::Editing(WizardStep::Account));
    }

    #[test]
    fn advancing_accumulates_the_union_of_steps() {
        let wizard = at_contact_step();
        assert_eq!(wizard.current_step(), WizardStep::Contact);
        assert_eq!(wizard.values().len(), 4);
        assert_eq!(wizard.values().text(fields::EMAIL_ID), "a@b.com");
        assert_eq!(wizard.values().text(fields::FIRST_NAME), "Jane");
    }

    #[test]
    fn save_merges_without_moving() {
        let mut wizard = Wizard::new();
        wizard.save(account()).unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Account);
        assert_eq!(wizard.values().text(fields::PASSWORD), "AAaa11!!");

        wizard.save(FormValueBag::new()).unwrap();
        assert_eq!(wizard.values().len(), 2);
    }

    #[test]
    fn retreat_then_advance_preserves_committed_values() {
        let mut wizard = Wizard::new();
        wizard.advance(account()).unwrap();
        assert_eq!(wizard.retreat().unwrap(), WizardStep::Account);
        assert_eq!(wizard.values().text(fields::EMAIL_ID), "a@b.com");

        let defaults = wizard.values().clone();
        wizard.advance(defaults).unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Profile);
        assert_eq!(wizard.values().text(fields::PASSWORD), "AAaa11!!");
    }

    #[test]
    fn transitions_are_bounded() {
        let mut wizard = Wizard::new();
        assert!(matches!(
            wizard.retreat(),
            Err(DomainError::InvalidStateTransition(_))
        ));

        let mut wizard = at_contact_step();
        let before = wizard.clone();
        let err = wizard.advance(contact()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert_eq!(wizard, before);
    }

    #[test]
    fn submission_requires_last_step() {
        let mut wizard = Wizard::new();
        assert!(wizard.begin_submission(account()).is_err());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn full_submission_carries_all_fields() {
        let mut wizard = at_contact_step();
        let bag = wizard.begin_submission(contact()).unwrap();
        assert_eq!(bag.len(), 7);
        assert!(bag.flag(fields::ACCEPT_TERMS));
        assert!(wizard.is_submitting());

        assert_eq!(
            wizard.finish_submission(true).unwrap(),
            WizardStatus::Submitted
        );
    }

    #[test]
    fn second_submission_while_in_flight_is_rejected() {
        let mut wizard = at_contact_step();
        wizard.begin_submission(contact()).unwrap();
        let err = wizard.begin_submission(contact()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert!(wizard.retreat().is_err());
    }

    #[test]
    fn rejected_submission_returns_to_last_step_with_values() {
        let mut wizard = at_contact_step();
        wizard.begin_submission(contact()).unwrap();
        assert_eq!(
            wizard.finish_submission(false).unwrap(),
            WizardStatus::Editing(WizardStep::Contact)
        );
        assert_eq!(wizard.values().len(), 7);
        assert!(wizard.begin_submission(FormValueBag::new()).is_ok());
    }

    #[test]
    fn finish_without_begin_is_rejected() {
        let mut wizard = Wizard::new();
        assert!(wizard.finish_submission(true).is_err());
    }

    #[test]
    fn validated_steps_drive_the_wizard() {
        let mut wizard = Wizard::new();
        for (step, input) in [
            (WizardStep::Account, account()),
            (WizardStep::Profile, profile()),
        ] {
            let committed = validate(&step.schema(), &input).unwrap();
            wizard.advance(committed).unwrap();
        }
        let committed = validate(&WizardStep::Contact.schema(), &contact()).unwrap();
        let bag = wizard.begin_submission(committed).unwrap();
        // lastName is committed as "" by the profile step validator
        assert_eq!(bag.len(), 8);
        assert_eq!(bag.text(fields::LAST_NAME), "");
    }
}
