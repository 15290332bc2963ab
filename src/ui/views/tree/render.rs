//! Repository tree pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::TreeView;
use crate::model::{Change, NodeId, RepoTree};
use crate::ui::{components, symbols, theme};

impl TreeView {
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        tree: Option<&RepoTree>,
        changes: &[Change],
        focused: bool,
    ) {
        let block = components::pane_block(" Repository ", focused);
        let Some(tree) = tree else {
            frame.render_widget(
                components::empty_state(symbols::empty::LOADING, None).block(block),
                area,
            );
            return;
        };

        let rows = self.rows(tree);
        let height = area.height.saturating_sub(2) as usize;
        self.cursor.clamp(rows.len());
        let scroll = self.cursor.follow(height);

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(scroll)
            .take(height)
            .map(|(i, &(id, depth))| {
                let collapsed = self.collapsed.contains(&tree.full_path(id));
                let line = node_line(tree, id, depth, collapsed, changes);
                if focused && i == self.cursor.selected() {
                    line.style(Style::default().bg(theme::revisions::SELECTED_BG))
                } else {
                    line
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

pub(super) fn node_line(
    tree: &RepoTree,
    id: NodeId,
    depth: usize,
    collapsed: bool,
    changes: &[Change],
) -> Line<'static> {
    let Some(item) = tree.get(id) else {
        return Line::default();
    };

    let (marker, color) = if !item.is_directory() {
        (symbols::markers::FILE, theme::tree::FILE)
    } else if item.listed && !collapsed {
        (symbols::markers::EXPANDED, theme::tree::DIRECTORY)
    } else {
        (symbols::markers::COLLAPSED, theme::tree::DIRECTORY)
    };

    let mut spans = vec![
        Span::raw("  ".repeat(depth)),
        Span::styled(format!("{marker} {}", item.name), Style::default().fg(color)),
    ];
    if let Some(status) = tree.change_marker(id, changes) {
        spans.push(Span::styled(
            format!(" [{status}]"),
            Style::default().fg(theme::status::color_for(status)),
        ));
    }
    Line::from(spans)
}
