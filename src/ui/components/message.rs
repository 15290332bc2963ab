//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for the error banner
///
/// `more` is the number of further errors waiting behind this one.
pub fn build_error_line(error: &str, more: usize) -> Line<'static> {
    let mut spans = vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {error} "), Style::default().fg(Color::Red)),
    ];
    if more > 0 {
        spans.push(Span::styled(
            format!("(+{more} more)"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Build a notification line, truncated with "…" to `max_width` columns
pub fn build_notification_line(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Started => (" Running: ", Color::Cyan),
        NotificationKind::Info => (" Info: ", Color::Green),
        NotificationKind::Warning => (" Warning: ", Color::Yellow),
    };

    let available = max_width.saturating_sub(label.len() + 2);
    let message = &notification.message;
    let text = if message.chars().count() > available {
        let kept: String = message.chars().take(available.saturating_sub(1)).collect();
        format!(" {kept}… ")
    } else {
        format!(" {message} ")
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Black).bg(color)),
        Span::styled(text, Style::default().fg(color)),
    ])
}
