//! Field group: label, input line and its feedback slot.

use crossterm::style::Color;

use crate::ui::{Line, Span};

/// Visible validation state of one field group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// No feedback shown.
    #[default]
    Untouched,
    /// Green cue, no message.
    Valid,
    /// Red cue plus the inline message.
    Invalid(String),
}

impl FieldStatus {
    /// Border color cue for the input line.
    fn cue(&self) -> Color {
        match self {
            FieldStatus::Untouched => Color::DarkGrey,
            FieldStatus::Valid => Color::Green,
            FieldStatus::Invalid(_) => Color::Red,
        }
    }
}

/// A labeled input with an error-message slot underneath.
///
/// Renders to three lines so the layout stays stable whether or not a
/// message is showing.
pub struct FieldGroup<'a> {
    label: &'a str,
    value: &'a str,
    cursor: usize,
    masked: bool,
    focused: bool,
    status: &'a FieldStatus,
}

impl<'a> FieldGroup<'a> {
    pub fn new(label: &'a str, value: &'a str, status: &'a FieldStatus) -> Self {
        Self {
            label,
            value,
            cursor: 0,
            masked: false,
            focused: false,
            status,
        }
    }

    /// Mask the value with bullets (hidden password).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Cursor position (character index), shown only when focused.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn render(self) -> Vec<Line> {
        let cue = self.status.cue();

        let label = if self.focused {
            vec![Span::raw("› "), Span::raw(self.label).bold()]
        } else {
            vec![Span::raw("  "), Span::colored(self.label, Color::Grey)]
        };

        let chars: Vec<char> = if self.masked {
            self.value.chars().map(|_| '•').collect()
        } else {
            self.value.chars().collect()
        };

        let input = if self.focused {
            // Cursor marker after the character it follows.
            let before: String = chars.iter().take(self.cursor).collect();
            let after: String = chars.iter().skip(self.cursor).collect();
            vec![
                Span::colored("  ┃ ", cue),
                Span::raw(before),
                Span::colored("▏", Color::White).bold(),
                Span::raw(after),
            ]
        } else {
            vec![
                Span::colored("  ┃ ", cue),
                Span::raw(chars.iter().collect::<String>()),
            ]
        };

        let feedback = match self.status {
            FieldStatus::Invalid(msg) => {
                vec![Span::raw("    "), Span::colored(msg.clone(), Color::Red)]
            }
            FieldStatus::Valid => vec![Span::raw("    "), Span::colored("✓", Color::Green)],
            FieldStatus::Untouched => Vec::new(),
        };

        vec![label, input, feedback]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn masked_field_shows_only_bullets() {
        let status = FieldStatus::Untouched;
        let lines = FieldGroup::new("Password", "hunter2", &status)
            .masked(true)
            .render();
        assert!(!text_of(&lines[1]).contains("hunter2"));
        assert!(text_of(&lines[1]).contains("•••••••"));
    }

    #[test]
    fn unmasked_field_shows_the_value() {
        let status = FieldStatus::Untouched;
        let lines = FieldGroup::new("Password", "hunter2", &status)
            .masked(false)
            .render();
        assert!(text_of(&lines[1]).contains("hunter2"));
    }

    #[test]
    fn invalid_status_renders_the_message() {
        let status = FieldStatus::Invalid("Email must include @".into());
        let lines = FieldGroup::new("Email", "nope", &status).render();
        assert!(text_of(&lines[2]).contains("Email must include @"));
    }

    #[test]
    fn untouched_status_leaves_the_slot_empty() {
        let status = FieldStatus::Untouched;
        let lines = FieldGroup::new("Phone", "", &status).render();
        assert_eq!(text_of(&lines[2]), "");
    }
}
