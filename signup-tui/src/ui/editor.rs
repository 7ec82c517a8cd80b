//! Single-line text editing state for one input field.

use super::event::{Key, Modifiers};

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (cursor movement).
    Moved,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Text content and cursor state for a single input.
///
/// The cursor is a character index into the text.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text, placing the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Clear the text and reset the cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EditOutcome {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                EditOutcome::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    EditOutcome::Changed
                } else {
                    EditOutcome::Moved
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    EditOutcome::Changed
                } else {
                    EditOutcome::Moved
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.cursor = self.cursor.saturating_sub(1);
                EditOutcome::Moved
            }

            Key::Right if !modifiers.ctrl => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                EditOutcome::Moved
            }

            Key::Home if !modifiers.ctrl => {
                self.cursor = 0;
                EditOutcome::Moved
            }

            Key::End if !modifiers.ctrl => {
                self.cursor = self.text.chars().count();
                EditOutcome::Moved
            }

            _ => EditOutcome::Ignored,
        }
    }

    /// Insert a character at the cursor.
    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
