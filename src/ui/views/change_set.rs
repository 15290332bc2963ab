//! Changeset pane
//!
//! Read-only detail of one revision: header, full message and the
//! affected items once they have been fetched.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::model::Revision;
use crate::ui::{components, symbols, theme};

pub fn render_change_set(frame: &mut Frame, area: Rect, revision: Option<&Revision>) {
    let block = components::pane_block(" Changeset ", false);
    let Some(revision) = revision else {
        let empty = components::empty_state(symbols::empty::NO_REVISION_SELECTED, None);
        frame.render_widget(empty.block(block), area);
        return;
    };

    let paragraph = Paragraph::new(change_set_lines(revision))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub(crate) fn change_set_lines(revision: &Revision) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("r{}", revision.number),
            Style::default()
                .fg(theme::revisions::NUMBER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" by "),
        Span::styled(
            revision.author.clone(),
            Style::default().fg(theme::revisions::AUTHOR),
        ),
        Span::raw(" on "),
        Span::styled(
            revision.date.clone(),
            Style::default().fg(theme::revisions::DATE),
        ),
    ])];

    lines.push(Line::from(""));
    lines.extend(
        revision
            .description
            .lines()
            .map(|l| Line::from(l.to_string())),
    );
    lines.push(Line::from(""));

    if revision.loading {
        lines.push(Line::from(symbols::empty::FETCHING_ITEMS).italic());
    }
    for item in &revision.affected_items {
        lines.push(Line::styled(
            item.clone(),
            Style::default().fg(theme::status::color_for(item)),
        ));
    }
    lines
}
