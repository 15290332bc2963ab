//! Notification banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::model::Notification;
use crate::ui::components;

/// Render a notification unless it has expired
pub fn render_notification_banner(frame: &mut Frame, area: Rect, notification: &Notification) {
    if notification.is_expired() {
        return;
    }
    let line = components::build_notification_line(notification, area.width as usize);
    frame.render_widget(Paragraph::new(line), area);
}
