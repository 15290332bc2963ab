//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render the oldest unacknowledged error in `area`
pub fn render_error_banner(frame: &mut Frame, area: Rect, errors: &[String]) {
    let Some(first) = errors.first() else {
        return;
    };
    let line = components::build_error_line(first, errors.len() - 1);
    frame.render_widget(Paragraph::new(line), area);
}
