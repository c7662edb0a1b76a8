//! Registration form model: values, rule tables, and the generic validator.

pub mod rules;
pub mod steps;
pub mod validator;
pub mod value_bag;

pub use rules::{CharClass, Check, FieldKind, FieldSpec, Rule};
pub use steps::{fields, StepSchema, WizardStep};
pub use self::validator::{validate, ValidationErrors};
pub use value_bag::{FormValue, FormValueBag};
