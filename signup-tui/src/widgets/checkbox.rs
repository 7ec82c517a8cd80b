//! Checkbox widget - a toggleable checkbox with a label.

use crossterm::style::Color;

use crate::ui::{Line, Span};

use super::field::FieldStatus;

/// A `[x]`/`[ ]` checkbox with its own error slot.
pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
    status: &'a FieldStatus,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool, status: &'a FieldStatus) -> Self {
        Self {
            label,
            checked,
            focused: false,
            status,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self) -> Vec<Line> {
        let indicator = if self.checked { "[x]" } else { "[ ]" };
        let marker = if self.focused { "› " } else { "  " };

        let mut row = vec![Span::raw(marker), Span::raw(indicator), Span::raw(" ")];
        if self.focused {
            row.push(Span::raw(self.label).bold());
        } else {
            row.push(Span::colored(self.label, Color::Grey));
        }

        let feedback = match self.status {
            FieldStatus::Invalid(msg) => {
                vec![Span::raw("    "), Span::colored(msg.clone(), Color::Red)]
            }
            _ => Vec::new(),
        };

        vec![row, feedback]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn indicator_follows_checked_state() {
        let status = FieldStatus::Untouched;
        let lines = Checkbox::new("I accept", true, &status).render();
        assert!(text_of(&lines[0]).contains("[x]"));

        let lines = Checkbox::new("I accept", false, &status).render();
        assert!(text_of(&lines[0]).contains("[ ]"));
    }

    #[test]
    fn error_shows_in_the_slot() {
        let status = FieldStatus::Invalid("You must accept the terms and conditions".into());
        let lines = Checkbox::new("I accept", false, &status).render();
        assert!(text_of(&lines[1]).contains("must accept"));
    }
}
