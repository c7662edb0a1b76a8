//! Presentation components

pub mod common;
pub mod side_info;
pub mod stepper;

pub use side_info::SideInfo;
pub use stepper::Stepper;
