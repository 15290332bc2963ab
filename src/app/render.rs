//! UI rendering for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{App, Pane};
use crate::keys::{self, KeyHint};
use crate::ui::views::{RevisionsInputMode, render_change_set};
use crate::ui::widgets;

impl App {
    /// Render the whole screen
    pub fn render(&mut self, frame: &mut Frame) {
        let [header, body, banner, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Paragraph::new(self.header_line()), header);
        self.render_body(frame, body);

        if !self.errors.is_empty() {
            widgets::render_error_banner(frame, banner, &self.errors);
        } else if let Some(notification) = &self.notification {
            widgets::render_notification_banner(frame, banner, notification);
        }

        widgets::render_status_bar(frame, status, self.current_hints(), self.pending);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);
        let [revisions_area, change_set_area] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(left);
        let [tree_area, changes_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(right);

        self.revisions_view.render(
            frame,
            revisions_area,
            self.state.revisions(),
            self.state.current_revision(),
            self.focus == Pane::Revisions,
        );
        render_change_set(frame, change_set_area, self.change_set.as_ref());
        self.tree_view.render(
            frame,
            tree_area,
            self.state.tree(),
            self.state.changes(),
            self.focus == Pane::Tree,
        );
        self.changes_view.render(
            frame,
            changes_area,
            self.state.changes(),
            self.focus == Pane::Changes,
        );
    }

    pub(crate) fn header_line(&self) -> Line<'static> {
        let revision = self
            .state
            .current_revision()
            .map_or_else(|| "r?".to_string(), |r| format!("r{r}"));
        let url = if self.state.repo_url().is_empty() {
            self.state.repo_path().to_string()
        } else {
            self.state.repo_url().to_string()
        };
        Line::from(vec![
            Span::styled(
                " svnview ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {url} ")),
            Span::styled(revision, Style::default().fg(Color::Yellow)),
        ])
    }

    fn current_hints(&self) -> &'static [KeyHint] {
        if self.changes_view.is_composing() {
            return keys::COMMIT_HINTS;
        }
        if self.revisions_view.input_mode == RevisionsInputMode::Filter {
            return keys::FILTER_HINTS;
        }
        match self.focus {
            Pane::Revisions => keys::REVISIONS_HINTS,
            Pane::Changes => keys::CHANGES_HINTS,
            Pane::Tree => keys::TREE_HINTS,
        }
    }
}
