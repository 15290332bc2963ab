//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from a prefix and key hints
pub fn build_status_bar(prefix: Vec<Span<'static>>, hints: &[KeyHint]) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Badge with the number of commands still running, empty when idle
pub fn pending_badge(pending: usize) -> Vec<Span<'static>> {
    if pending == 0 {
        return Vec::new();
    }
    vec![Span::styled(
        format!(" ⟳ {pending} running "),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )]
}

/// Render the status bar on the bottom row of `area`
pub fn render_status_bar(frame: &mut Frame, area: Rect, hints: &[KeyHint], pending: usize) {
    if area.height == 0 {
        return;
    }
    let status = build_status_bar(pending_badge(pending), hints);
    frame.render_widget(Paragraph::new(status), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_build_status_bar_without_prefix() {
        let line = build_status_bar(Vec::new(), &[keys::HINT_QUIT, keys::HINT_REFRESH]);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, " [q] Quit ");
    }

    #[test]
    fn test_pending_badge() {
        assert!(pending_badge(0).is_empty());
        assert_eq!(pending_badge(3)[0].content, " ⟳ 3 running ");
    }
}
