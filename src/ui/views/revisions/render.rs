//! Revisions pane rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{RevisionsInputMode, RevisionsView};
use crate::model::Revision;
use crate::ui::{components, symbols, theme};

/// Columns of the date shown per row (`YYYY-MM-DD HH:MM`)
const DATE_WIDTH: usize = 16;

impl RevisionsView {
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        revisions: &[Revision],
        current: Option<u64>,
        focused: bool,
    ) {
        let (list_area, filter_area) = if self.input_mode == RevisionsInputMode::Filter
            || !self.filter.is_empty()
        {
            let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let visible = self.visible(revisions);
        let title = format!(" Revisions ({}/{}) ", visible.len(), revisions.len());
        let block = components::pane_block(title, focused);

        if visible.is_empty() {
            let message = if revisions.is_empty() {
                symbols::empty::LOADING
            } else {
                symbols::empty::NO_MATCHES
            };
            frame.render_widget(components::empty_state(message, None).block(block), list_area);
        } else {
            let height = list_area.height.saturating_sub(2) as usize;
            self.cursor.clamp(visible.len());
            let scroll = self.cursor.follow(height);

            let lines: Vec<Line> = visible
                .iter()
                .enumerate()
                .skip(scroll)
                .take(height)
                .map(|(i, rev)| {
                    let line = revision_line(rev, current);
                    if focused && i == self.cursor.selected() {
                        line.style(Style::default().bg(theme::revisions::SELECTED_BG))
                    } else {
                        line
                    }
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), list_area);
        }

        if let Some(filter_area) = filter_area {
            let cursor = if self.input_mode == RevisionsInputMode::Filter {
                "▏"
            } else {
                ""
            };
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::revisions::AUTHOR)),
                Span::raw(format!("{}{cursor}", self.filter)),
            ]);
            frame.render_widget(Paragraph::new(line), filter_area);
        }
    }
}

/// One row: marker, number, author, date, first message line
///
/// The working copy's revision is bold; revisions newer than it are
/// italic.
pub(super) fn revision_line(rev: &Revision, current: Option<u64>) -> Line<'static> {
    let is_current = current == Some(rev.number);
    let is_newer = current.is_some_and(|c| rev.number > c);

    let (marker, marker_color) = if is_current {
        (symbols::markers::CURRENT, theme::revisions::CURRENT_MARKER)
    } else if is_newer {
        (symbols::markers::NORMAL, theme::revisions::NEWER)
    } else {
        (symbols::markers::NORMAL, theme::revisions::DATE)
    };

    let date: String = rev.date.chars().take(DATE_WIDTH).collect();
    let line = Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(marker_color)),
        Span::styled(
            format!("r{:<6} ", rev.number),
            Style::default().fg(theme::revisions::NUMBER),
        ),
        Span::styled(
            format!("{:<12} ", rev.author),
            Style::default().fg(theme::revisions::AUTHOR),
        ),
        Span::styled(format!("{date} "), Style::default().fg(theme::revisions::DATE)),
        Span::raw(rev.display_summary().to_string()),
    ]);

    if is_current {
        line.style(Style::default().add_modifier(Modifier::BOLD))
    } else if is_newer {
        line.style(Style::default().add_modifier(Modifier::ITALIC))
    } else {
        line
    }
}
