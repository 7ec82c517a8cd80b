//! Raw-mode screen with span-based row drawing.
//!
//! A full redraw per frame: the form is a handful of rows, so no damage
//! tracking is carried. Raw mode and the alternate screen are restored
//! on drop.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};
use unicode_width::UnicodeWidthStr;

/// One styled run of text within a line.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, fg: Color) -> Self {
        Self {
            text: text.into(),
            fg: Some(fg),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One row of the frame.
pub type Line = Vec<Span>;

pub struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Poll for input, draining any additional pending events.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw a full frame, one line per row, truncated to the terminal width.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (width, height) = terminal::size()?;

        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            let mut used = 0usize;
            for span in line {
                if used >= width as usize {
                    break;
                }
                let text = truncate_to_width(&span.text, width as usize - used);
                used += text.width();

                if let Some(fg) = span.fg {
                    queue!(self.stdout, SetForegroundColor(fg))?;
                }
                if span.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                queue!(self.stdout, Print(&text))?;
                queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))?;
            }
        }

        self.stdout.flush()
    }
}

/// Cut a string to at most `max` display columns.
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        let mut next = out.clone();
        next.push(c);
        if next.width() > max {
            break;
        }
        out = next;
    }
    out
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        // Wide chars count as two columns.
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 3), "日");
    }
}
