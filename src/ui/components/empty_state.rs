//! Empty state components
//!
//! Shown in a pane when there's nothing to list.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state with an optional gray hint
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}
