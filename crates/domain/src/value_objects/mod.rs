//! Value objects shared by the wizard and the UI

mod country_code;

pub use country_code::CountryCode;
