//! Form widgets: field groups, checkbox, strength checklist, snackbar.

pub mod checkbox;
pub mod checklist;
pub mod field;
pub mod snackbar;

pub use checkbox::Checkbox;
pub use checklist::strength_checklist;
pub use field::{FieldGroup, FieldStatus};
pub use snackbar::{DEFAULT_SNACKBAR_DURATION, Snackbar};
