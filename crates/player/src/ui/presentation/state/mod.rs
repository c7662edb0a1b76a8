//! Presentation state held in Dioxus signals

mod wizard_session;

pub use wizard_session::WizardSession;
