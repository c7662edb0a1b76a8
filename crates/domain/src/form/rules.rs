//! Data-driven field rules
//!
//! Each field carries an ordered list of [`Check`]s (a [`Rule`] plus the message
//! shown when it fails). The generic validator walks these tables; no step has
//! bespoke validation code.

use std::borrow::Cow;

use validator::ValidateEmail;

use super::value_bag::FormValue;

/// ASCII character classes used by the counting and charset rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `A-Z`
    Uppercase,
    /// `a-z`
    Lowercase,
    /// `0-9`
    Digit,
    /// Anything that is not an ASCII letter or digit
    Special,
    /// `A-Za-z`
    Alphabetic,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::Digit => c.is_ascii_digit(),
            Self::Special => !c.is_ascii_alphanumeric(),
            Self::Alphabetic => c.is_ascii_alphabetic(),
        }
    }
}

/// A single predicate over a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-empty; checkboxes always satisfy this
    Required,
    /// Text must be a syntactically valid email address
    Email,
    /// Text must contain at least `count` characters of `class`
    MinClassCount { class: CharClass, count: usize },
    /// Every character must belong to `class` (empty text passes)
    OnlyClass(CharClass),
    /// At least `n` characters
    MinLength(usize),
    /// At most `n` characters
    MaxLength(usize),
    /// Exactly `n` ASCII digits and nothing else
    ExactDigits(usize),
    /// Text must equal one of the listed options
    OneOf(&'static [&'static str]),
    /// Checkbox must be ticked
    Accepted,
}

impl Rule {
    /// Evaluate the rule. Text rules fail on checkbox values and vice versa.
    pub fn is_satisfied_by(&self, value: &FormValue) -> bool {
        match self {
            Self::Required => match value {
                FormValue::Text(s) => !s.is_empty(),
                FormValue::Flag(_) => true,
            },
            Self::Accepted => value.as_flag() == Some(true),
            _ => match value.as_text() {
                Some(text) => self.check_text(text),
                None => false,
            },
        }
    }

    fn check_text(&self, text: &str) -> bool {
        match self {
            Self::Email => text.validate_email(),
            Self::MinClassCount { class, count } => {
                text.chars().filter(|c| class.contains(*c)).count() >= *count
            }
            Self::OnlyClass(class) => text.chars().all(|c| class.contains(c)),
            Self::MinLength(n) => text.chars().count() >= *n,
            Self::MaxLength(n) => text.chars().count() <= *n,
            Self::ExactDigits(n) => {
                text.chars().count() == *n && text.chars().all(|c| c.is_ascii_digit())
            }
            Self::OneOf(options) => options.contains(&text),
            Self::Required | Self::Accepted => false,
        }
    }
}

/// A rule paired with the message surfaced when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub rule: Rule,
    pub message: Cow<'static, str>,
}

impl Check {
    pub fn new(rule: Rule, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// How a field is rendered. The validator ignores this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    MultiLine,
    Select,
    Checkbox,
}

/// One field of a step: its wire name, label, input kind and rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub checks: Vec<Check>,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            checks: Vec::new(),
        }
    }

    /// Mark the field required. The required check always runs first.
    pub fn required(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.checks.insert(0, Check::new(Rule::Required, message));
        self
    }

    /// Append a check; checks run in insertion order.
    pub fn check(mut self, rule: Rule, message: impl Into<Cow<'static, str>>) -> Self {
        self.checks.push(Check::new(rule, message));
        self
    }

    pub fn is_required(&self) -> bool {
        self.checks.iter().any(|c| c.rule == Rule::Required)
    }

    /// Value committed when the field was never touched.
    pub fn empty_value(&self) -> FormValue {
        match self.kind {
            FieldKind::Checkbox => FormValue::Flag(false),
            _ => FormValue::Text(String::new()),
        }
    }

    /// First failing check's message, or `None` when the value passes.
    pub fn first_failure(&self, value: &FormValue) -> Option<&str> {
        if value.is_blank() && !self.is_required() {
            return None;
        }
        self.checks
            .iter()
            .find(|check| !check.rule.is_satisfied_by(value))
            .map(|check| check.message.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_counts_are_independent() {
        let upper = Rule::MinClassCount {
            class: CharClass::Uppercase,
            count: 2,
        };
        assert!(upper.is_satisfied_by(&"aAbB".into()));
        assert!(!upper.is_satisfied_by(&"aAbb".into()));
    }

    #[test]
    fn special_means_not_ascii_alphanumeric() {
        assert!(CharClass::Special.contains('!'));
        assert!(CharClass::Special.contains(' '));
        assert!(CharClass::Special.contains('é'));
        assert!(!CharClass::Special.contains('z'));
        assert!(!CharClass::Special.contains('7'));
    }

    #[test]
    fn exact_digits_rejects_wrong_length_and_non_digits() {
        let rule = Rule::ExactDigits(10);
        assert!(rule.is_satisfied_by(&"9876543210".into()));
        assert!(!rule.is_satisfied_by(&"12345".into()));
        assert!(!rule.is_satisfied_by(&"12345678901".into()));
        assert!(!rule.is_satisfied_by(&"98765432a0".into()));
    }

    #[test]
    fn text_rules_fail_on_flags() {
        assert!(!Rule::MinLength(0).is_satisfied_by(&true.into()));
        assert!(!Rule::Accepted.is_satisfied_by(&"true".into()));
        assert!(Rule::Accepted.is_satisfied_by(&true.into()));
    }

    #[test]
    fn required_is_inserted_first() {
        let field = FieldSpec::new("address", "Address", FieldKind::MultiLine)
            .check(Rule::MinLength(10), "too short")
            .required("Address is required");

        assert!(field.is_required());
        assert_eq!(field.first_failure(&"".into()), Some("Address is required"));
        assert_eq!(field.first_failure(&"short".into()), Some("too short"));
        assert_eq!(field.first_failure(&"long enough street".into()), None);
    }

    #[test]
    fn optional_blank_field_skips_its_checks() {
        let field = FieldSpec::new("lastName", "Last Name", FieldKind::Text)
            .check(Rule::MinLength(2), "too short");
        assert_eq!(field.first_failure(&"".into()), None);
        assert_eq!(field.first_failure(&"x".into()), Some("too short"));
    }
}
