//! Terminal plumbing: events, line editing, screen drawing.

pub mod editor;
pub mod event;
pub mod screen;

pub use editor::{EditOutcome, LineEditor};
pub use event::{Key, Modifiers};
pub use screen::{Line, Screen, Span};
