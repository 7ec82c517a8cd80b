//! Pure validation core for the signup form.
//!
//! Everything in this crate is side-effect free: rules are plain
//! predicates over values, and the form/checklist state machines return
//! results for the front-end to display. No terminal, no storage.

pub mod checklist;
pub mod fields;
pub mod form;
pub mod result;
pub mod rules;
pub mod validator;

pub use checklist::{ChecklistTransition, Requirements, StrengthChecklist};
pub use fields::FieldId;
pub use form::{Feedback, RegistrationForm};
pub use result::{FieldError, ValidationResult};
pub use validator::{FieldBuilder, Validator};
