//! The three registration steps and their rule tables.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::{CharClass, FieldKind, FieldSpec, Rule};
use crate::value_objects::CountryCode;

/// Wire names of every field in the registration payload.
pub mod fields {
    pub const EMAIL_ID: &str = "emailId";
    pub const PASSWORD: &str = "password";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const ADDRESS: &str = "address";
    pub const COUNTRY_CODE: &str = "countryCode";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const ACCEPT_TERMS: &str = "acceptTermsAndCondition";
}

/// A wizard step. Step index is `self as usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 0: email + password
    Account,
    /// Step 1: name + address
    Profile,
    /// Step 2: phone + terms
    Contact,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::Account, Self::Profile, Self::Contact];

    /// Number of steps in the wizard
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Label shown in the stepper header
    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Form 1",
            Self::Profile => "Form 2",
            Self::Contact => "Form 3",
        }
    }

    /// Rule table for this step
    pub fn schema(self) -> StepSchema {
        match self {
            Self::Account => account_schema(),
            Self::Profile => profile_schema(),
            Self::Contact => contact_schema(),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The ordered field set of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSchema {
    pub step: WizardStep,
    pub fields: Vec<FieldSpec>,
}

impl StepSchema {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

fn at_least_two(class: CharClass) -> Rule {
    Rule::MinClassCount { class, count: 2 }
}

fn account_schema() -> StepSchema {
    StepSchema {
        step: WizardStep::Account,
        fields: vec![
            FieldSpec::new(fields::EMAIL_ID, "Email ID", FieldKind::Email)
                .required("Email is required")
                .check(Rule::Email, "Invalid email address"),
            FieldSpec::new(fields::PASSWORD, "Password", FieldKind::Password)
                .required("Password is required")
                .check(
                    at_least_two(CharClass::Uppercase),
                    "Must contain at least 2 uppercase letters",
                )
                .check(
                    at_least_two(CharClass::Lowercase),
                    "Must contain at least 2 lowercase letters",
                )
                .check(
                    at_least_two(CharClass::Digit),
                    "Must contain at least 2 numbers",
                )
                .check(
                    at_least_two(CharClass::Special),
                    "Must contain at least 2 special characters",
                ),
        ],
    }
}

fn profile_schema() -> StepSchema {
    StepSchema {
        step: WizardStep::Profile,
        fields: vec![
            FieldSpec::new(fields::FIRST_NAME, "First Name", FieldKind::Text)
                .required("First name is required")
                .check(
                    Rule::OnlyClass(CharClass::Alphabetic),
                    "Only alphabets are allowed",
                )
                .check(Rule::MinLength(2), "First name must be at least 2 characters")
                .check(Rule::MaxLength(50), "First name must be at most 50 characters"),
            FieldSpec::new(fields::LAST_NAME, "Last Name", FieldKind::Text).check(
                Rule::OnlyClass(CharClass::Alphabetic),
                "Only alphabets are allowed",
            ),
            FieldSpec::new(fields::ADDRESS, "Address", FieldKind::MultiLine)
                .required("Address is required")
                .check(Rule::MinLength(10), "Address must be at least 10 characters"),
        ],
    }
}

fn contact_schema() -> StepSchema {
    StepSchema {
        step: WizardStep::Contact,
        fields: vec![
            FieldSpec::new(fields::COUNTRY_CODE, "Country Code", FieldKind::Select)
                .required("Country code is required")
                .check(Rule::OneOf(CountryCode::CODES), "Invalid country code"),
            FieldSpec::new(fields::PHONE_NUMBER, "Phone Number", FieldKind::Text)
                .required("Phone number is required")
                .check(Rule::ExactDigits(10), "Phone number must be 10 digits"),
            FieldSpec::new(
                fields::ACCEPT_TERMS,
                "I accept the terms and conditions",
                FieldKind::Checkbox,
            )
            .check(Rule::Accepted, "You must accept the terms and conditions"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValue;

    #[test]
    fn step_navigation_is_bounded() {
        assert_eq!(WizardStep::Account.previous(), None);
        assert_eq!(WizardStep::Account.next(), Some(WizardStep::Profile));
        assert_eq!(WizardStep::Contact.next(), None);
        assert!(WizardStep::Contact.is_last());
        assert!(WizardStep::Account.is_first());
        assert_eq!(WizardStep::from_index(3), None);
    }

    #[test]
    fn steps_own_disjoint_fields() {
        let mut seen = std::collections::HashSet::new();
        for step in WizardStep::ALL {
            for name in step.schema().field_names() {
                assert!(seen.insert(name), "{name} appears in more than one step");
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn last_name_is_the_only_optional_text_field() {
        let optional: Vec<_> = WizardStep::ALL
            .iter()
            .flat_map(|s| s.schema().fields)
            .filter(|f| f.kind != FieldKind::Checkbox && !f.is_required())
            .map(|f| f.name)
            .collect();
        assert_eq!(optional, vec![fields::LAST_NAME]);
    }

    #[test]
    fn terms_checkbox_is_gated_by_acceptance_alone() {
        let schema = WizardStep::Contact.schema();
        let terms = schema
            .fields
            .iter()
            .find(|f| f.name == fields::ACCEPT_TERMS)
            .unwrap();

        let rules: Vec<_> = terms.checks.iter().map(|c| c.rule.clone()).collect();
        assert_eq!(rules, vec![Rule::Accepted]);
        assert_eq!(
            terms.first_failure(&FormValue::Flag(false)),
            Some("You must accept the terms and conditions")
        );
        assert_eq!(terms.first_failure(&FormValue::Flag(true)), None);
    }
}
