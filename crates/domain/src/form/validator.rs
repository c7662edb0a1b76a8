//! Generic step validator

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::steps::StepSchema;
use super::value_bag::FormValueBag;

/// Per-field error messages for a step that failed validation.
///
/// Only the first failing rule of each field is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .0.len())]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validate `input` against every field of `schema`.
///
/// On success returns a bag holding exactly the step's fields; untouched
/// optional fields are filled with their empty value. Keys in `input` that the
/// step does not own are ignored.
pub fn validate(
    schema: &StepSchema,
    input: &FormValueBag,
) -> Result<FormValueBag, ValidationErrors> {
    let mut committed = FormValueBag::new();
    let mut errors = ValidationErrors::new();

    for field in &schema.fields {
        let value = input
            .get(field.name)
            .cloned()
            .unwrap_or_else(|| field.empty_value());

        match field.first_failure(&value) {
            Some(message) => errors.add(field.name, message),
            None => committed.insert(field.name, value),
        }
    }

    if errors.is_empty() {
        Ok(committed)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::steps::{fields, WizardStep};

    fn validate_field(step: WizardStep, field: &str, value: &str) -> Option<String> {
        let input = FormValueBag::new().with(field, value);
        match validate(&step.schema(), &input) {
            Ok(_) => None,
            Err(errors) => errors.get(field).map(str::to_string),
        }
    }

    fn password_error(password: &str) -> Option<String> {
        validate_field(WizardStep::Account, fields::PASSWORD, password)
    }

    #[test]
    fn password_accepted_only_when_all_four_rules_hold() {
        assert_eq!(password_error("AAaa11!!"), None);
        assert_eq!(password_error("!1a@B2bC"), None);

        assert_eq!(
            password_error("Aaa11!!x").as_deref(),
            Some("Must contain at least 2 uppercase letters")
        );
        assert_eq!(
            password_error("AAa11!!X").as_deref(),
            Some("Must contain at least 2 lowercase letters")
        );
        assert_eq!(
            password_error("AAaa1!!x").as_deref(),
            Some("Must contain at least 2 numbers")
        );
        assert_eq!(
            password_error("AAaa11!x").as_deref(),
            Some("Must contain at least 2 special characters")
        );
        assert_eq!(password_error("").as_deref(), Some("Password is required"));
    }

    #[test]
    fn email_syntax() {
        let err = |v: &str| validate_field(WizardStep::Account, fields::EMAIL_ID, v);
        assert_eq!(err("a@b.com"), None);
        assert_eq!(err("not-an-email").as_deref(), Some("Invalid email address"));
        assert_eq!(err("").as_deref(), Some("Email is required"));
    }

    #[test]
    fn first_name_rules_in_order() {
        let err = |v: &str| validate_field(WizardStep::Profile, fields::FIRST_NAME, v);
        assert_eq!(err("Jane"), None);
        assert_eq!(err("").as_deref(), Some("First name is required"));
        assert_eq!(err("J4ne").as_deref(), Some("Only alphabets are allowed"));
        assert_eq!(
            err("J").as_deref(),
            Some("First name must be at least 2 characters")
        );
        let long = "a".repeat(51);
        assert_eq!(
            err(&long).as_deref(),
            Some("First name must be at most 50 characters")
        );
        assert_eq!(err(&"a".repeat(50)), None);
    }

    #[test]
    fn last_name_is_optional_but_alphabetic() {
        let err = |v: &str| validate_field(WizardStep::Profile, fields::LAST_NAME, v);
        assert_eq!(err(""), None);
        assert_eq!(err("Doe"), None);
        assert_eq!(err("O'Neil").as_deref(), Some("Only alphabets are allowed"));
    }

    #[test]
    fn address_minimum_length() {
        let err = |v: &str| validate_field(WizardStep::Profile, fields::ADDRESS, v);
        assert_eq!(err("123 Main Street"), None);
        assert_eq!(
            err("Short St").as_deref(),
            Some("Address must be at least 10 characters")
        );
    }

    #[test]
    fn phone_number_is_exactly_ten_digits() {
        let err = |v: &str| validate_field(WizardStep::Contact, fields::PHONE_NUMBER, v);
        assert_eq!(err("9876543210"), None);
        assert!(err("12345").is_some());
        assert!(err("12345678901").is_some());
    }

    #[test]
    fn country_code_is_enumerated() {
        let err = |v: &str| validate_field(WizardStep::Contact, fields::COUNTRY_CODE, v);
        assert_eq!(err("+91"), None);
        assert_eq!(err("+1"), None);
        assert_eq!(err("+44").as_deref(), Some("Invalid country code"));
    }

    #[test]
    fn terms_must_be_accepted() {
        let schema = WizardStep::Contact.schema();
        let base = FormValueBag::new()
            .with(fields::COUNTRY_CODE, "+1")
            .with(fields::PHONE_NUMBER, "5551234567");

        let errors = validate(&schema, &base).unwrap_err();
        assert_eq!(
            errors.get(fields::ACCEPT_TERMS),
            Some("You must accept the terms and conditions")
        );
        assert_eq!(errors.len(), 1);

        let ok = validate(&schema, &base.with(fields::ACCEPT_TERMS, true)).unwrap();
        assert!(ok.flag(fields::ACCEPT_TERMS));
    }

    #[test]
    fn fields_validate_independently() {
        let input = FormValueBag::new()
            .with(fields::EMAIL_ID, "bad")
            .with(fields::PASSWORD, "AAaa11!!");
        let errors = validate(&WizardStep::Account.schema(), &input).unwrap_err();
        assert!(errors.get(fields::EMAIL_ID).is_some());
        assert!(errors.get(fields::PASSWORD).is_none());
    }

    #[test]
    fn committed_bag_contains_exactly_the_step_fields() {
        let input = FormValueBag::new()
            .with(fields::FIRST_NAME, "Jane")
            .with(fields::ADDRESS, "123 Main Street")
            .with(fields::EMAIL_ID, "stray@example.com");

        let committed = validate(&WizardStep::Profile.schema(), &input).unwrap();
        assert_eq!(committed.len(), 3);
        assert_eq!(committed.text(fields::LAST_NAME), "");
        assert!(!committed.contains(fields::EMAIL_ID));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add(fields::ADDRESS, "Address is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "address": "Address is required" }));
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
    }
}
