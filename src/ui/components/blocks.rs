//! Block components for UI rendering

use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::ui::theme;

/// Bordered pane with a title, highlighted when it has focus
pub fn pane_block<'a>(title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
    let (color, modifier) = if focused {
        (theme::pane::FOCUSED, Modifier::BOLD)
    } else {
        (theme::pane::UNFOCUSED, Modifier::empty())
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title.into().style(Style::default().add_modifier(modifier)))
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title.into())
}
