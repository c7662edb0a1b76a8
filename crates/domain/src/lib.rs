//! Stepform domain: field rules, the generic validator, and the wizard state machine.
//!
//! Nothing in this crate touches the UI or the network.

pub mod error;
pub mod form;
pub mod value_objects;
pub mod wizard;

pub use error::DomainError;

pub use form::{
    fields, validate, CharClass, Check, FieldKind, FieldSpec, FormValue, FormValueBag, Rule,
    StepSchema, ValidationErrors, WizardStep,
};

pub use value_objects::CountryCode;

pub use wizard::{Wizard, WizardStatus};
