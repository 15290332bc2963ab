//! Local changes pane rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::ChangesView;
use crate::model::Change;
use crate::ui::{components, symbols, theme};

impl ChangesView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect, changes: &[Change], focused: bool) {
        let (list_area, editor_area) = if self.textarea.is_some() {
            let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(6)]).split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let block = components::pane_block(format!(" Local changes ({}) ", changes.len()), focused);
        if changes.is_empty() {
            frame.render_widget(
                components::empty_state(symbols::empty::CLEAN, None).block(block),
                list_area,
            );
        } else {
            let height = list_area.height.saturating_sub(2) as usize;
            self.cursor.clamp(changes.len());
            let scroll = self.cursor.follow(height);
            let lines: Vec<Line> = changes
                .iter()
                .enumerate()
                .skip(scroll)
                .take(height)
                .map(|(i, change)| {
                    let line = change_line(change);
                    if focused && i == self.cursor.selected() {
                        line.style(Style::default().bg(theme::revisions::SELECTED_BG))
                    } else {
                        line
                    }
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), list_area);
        }

        if let (Some(area), Some(textarea)) = (editor_area, self.textarea.as_mut()) {
            textarea.set_block(components::bordered_block(" Commit message "));
            frame.render_widget(&*textarea, area);
        }
    }
}

pub(super) fn change_line(change: &Change) -> Line<'static> {
    let color = theme::status::color_for(&change.status);
    Line::from(vec![
        Span::styled(format!("{:<2}", change.status), Style::default().fg(color)),
        Span::raw(change.item.clone()),
    ])
}
