//! Terminal front-end for the signup form.
//!
//! Validation lives in `signup-lib`; this crate owns the screen, the
//! keyboard wiring and the persistence mirror.

pub mod app;
pub mod paths;
pub mod store;
pub mod ui;
pub mod widgets;
