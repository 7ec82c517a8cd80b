//! The five-item password strength checklist.

use crossterm::style::Color;
use signup_lib::Requirements;

use crate::ui::{Line, Span};

/// Render the strength checklist, or nothing while it is detached.
pub fn strength_checklist(requirements: Option<&Requirements>) -> Vec<Line> {
    let Some(req) = requirements else {
        return Vec::new();
    };

    let items = [
        (req.length, "At least 8 characters"),
        (req.uppercase, "An uppercase letter"),
        (req.lowercase, "A lowercase letter"),
        (req.digit, "A number"),
        (req.symbol, "A symbol (@$!%*?&)"),
    ];

    let mut lines = vec![vec![
        Span::raw("    "),
        Span::colored("Password should contain:", Color::Grey),
    ]];
    for (met, text) in items {
        let (mark, color) = if met {
            ("✓", Color::Green)
        } else {
            ("✗", Color::DarkGrey)
        };
        lines.push(vec![
            Span::raw("      "),
            Span::colored(mark, color),
            Span::raw(" "),
            Span::colored(text, color),
        ]);
    }
    lines
}
