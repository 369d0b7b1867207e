//! Rule-based event validation.
//!
//! Required-field contracts keyed by (platform, event name).

pub mod rules;

pub use rules::{validate, ValidationResult};
