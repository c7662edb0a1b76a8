//! Dialing codes offered by the contact step

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported international dialing code.
///
/// Serialized as the bare code (`"+91"`, `"+1"`), which is also what the
/// registration payload carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    #[serde(rename = "+91")]
    India,
    #[serde(rename = "+1")]
    America,
}

impl CountryCode {
    /// Accepted wire values, in dropdown order
    pub const CODES: &'static [&'static str] = &["+91", "+1"];

    /// Get all codes for UI dropdowns
    pub fn all() -> &'static [CountryCode] {
        &[CountryCode::India, CountryCode::America]
    }

    pub fn code(&self) -> &'static str {
        match self {
            CountryCode::India => "+91",
            CountryCode::America => "+1",
        }
    }

    pub fn country_name(&self) -> &'static str {
        match self {
            CountryCode::India => "India",
            CountryCode::America => "America",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            CountryCode::India => "🇮🇳",
            CountryCode::America => "🇺🇸",
        }
    }

    /// Dropdown label, e.g. "India (+91)"
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.country_name(), self.code())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+91" => Ok(CountryCode::India),
            "+1" => Ok(CountryCode::America),
            _ => Err(DomainError::parse(format!(
                "Unknown country code: '{}'. Valid values: +91, +1",
                s
            ))),
        }
    }
}
