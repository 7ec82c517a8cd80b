//! Transient success notification.

use std::time::{Duration, Instant};

use crossterm::style::Color;

use crate::ui::{Line, Span};

/// Default duration for snackbar notifications.
pub const DEFAULT_SNACKBAR_DURATION: Duration = Duration::from_secs(4);

/// A transient message with a hide deadline.
///
/// Re-showing while visible simply replaces the message and re-arms the
/// deadline; the event loop's tick hides it once the deadline passes.
#[derive(Debug, Clone, Default)]
pub struct Snackbar {
    message: String,
    deadline: Option<Instant>,
}

impl Snackbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message for [`DEFAULT_SNACKBAR_DURATION`] from now.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.deadline = Some(Instant::now() + DEFAULT_SNACKBAR_DURATION);
    }

    /// The message, while the deadline has not passed.
    pub fn message(&self) -> Option<&str> {
        match self.deadline {
            Some(deadline) if Instant::now() < deadline => Some(&self.message),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.message().is_some()
    }

    /// Render the snackbar row, or nothing while hidden.
    pub fn render(&self) -> Vec<Line> {
        match self.message() {
            Some(msg) => vec![vec![
                Span::raw("  "),
                Span::colored(format!(" {msg} "), Color::Green).bold(),
            ]],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_shown() {
        let snackbar = Snackbar::new();
        assert!(!snackbar.is_visible());
        assert!(snackbar.render().is_empty());
    }

    #[test]
    fn visible_after_show() {
        let mut snackbar = Snackbar::new();
        snackbar.show("Registration successful!");
        assert_eq!(snackbar.message(), Some("Registration successful!"));
        assert!(!snackbar.render().is_empty());
    }

    #[test]
    fn reshow_rearms_the_deadline() {
        let mut snackbar = Snackbar::new();
        snackbar.show("first");
        let first_deadline = snackbar.deadline;
        snackbar.show("second");
        assert!(snackbar.deadline >= first_deadline);
        assert_eq!(snackbar.message(), Some("second"));
    }
}
