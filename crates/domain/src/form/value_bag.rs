//! Accumulated form values
//!
//! A [`FormValueBag`] is the wire shape of the registration: a flat JSON object
//! mapping field names to either strings or booleans. Steps own disjoint keys,
//! so merging a step's values never clobbers another step's data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single form field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Text inputs, selects, text areas
    Text(String),
    /// Checkboxes
    Flag(bool),
}

impl FormValue {
    /// Returns the text content, or `None` for checkbox values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    /// Returns the checkbox state, or `None` for text values.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Whether the value counts as "not filled in" for a text field.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// Field name to value mapping accumulated across wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValueBag(BTreeMap<String, FormValue>);

impl FormValueBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for assembling raw input.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FormValue>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FormValue> {
        self.0.get(field)
    }

    /// Text value for `field`, empty string when absent or not text.
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(FormValue::as_text).unwrap_or("")
    }

    /// Checkbox value for `field`, `false` when absent or not a flag.
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(FormValue::as_flag).unwrap_or(false)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `partial` into this bag. Keys present in `partial` win.
    pub fn merge(&mut self, partial: FormValueBag) {
        self.0.extend(partial.0);
    }
}

impl FromIterator<(String, FormValue)> for FormValueBag {
    fn from_iter<I: IntoIterator<Item = (String, FormValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_earlier_keys_and_overwrites_same_name() {
        let mut bag = FormValueBag::new()
            .with("emailId", "a@b.com")
            .with("password", "old");
        bag.merge(FormValueBag::new().with("password", "new").with("firstName", "Jane"));

        assert_eq!(bag.len(), 3);
        assert_eq!(bag.text("emailId"), "a@b.com");
        assert_eq!(bag.text("password"), "new");
        assert_eq!(bag.text("firstName"), "Jane");
    }

    #[test]
    fn serializes_as_flat_object_of_strings_and_bools() {
        let bag = FormValueBag::new()
            .with("phoneNumber", "5551234567")
            .with("acceptTermsAndCondition", true);

        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "acceptTermsAndCondition": true,
                "phoneNumber": "5551234567",
            })
        );
    }

    #[test]
    fn deserializes_mixed_values() {
        let bag: FormValueBag =
            serde_json::from_str(r#"{"countryCode":"+91","acceptTermsAndCondition":false}"#)
                .unwrap();
        assert_eq!(bag.get("countryCode"), Some(&FormValue::Text("+91".into())));
        assert_eq!(bag.get("acceptTermsAndCondition"), Some(&FormValue::Flag(false)));
    }

    #[test]
    fn typed_accessors_default_when_missing_or_mismatched() {
        let bag = FormValueBag::new().with("lastName", true);
        assert_eq!(bag.text("lastName"), "");
        assert_eq!(bag.text("missing"), "");
        assert!(!bag.flag("missing"));
        assert!(bag.flag("lastName"));
    }

    #[test]
    fn blank_only_applies_to_empty_text() {
        assert!(FormValue::from("").is_blank());
        assert!(!FormValue::from(" ").is_blank());
        assert!(!FormValue::from(false).is_blank());
    }
}
