//! Repository tree pane input handling

use crossterm::event::KeyEvent;

use super::{TreeAction, TreeView};
use crate::keys;
use crate::model::RepoTree;

impl TreeView {
    pub fn handle_key(&mut self, key: KeyEvent, tree: &RepoTree) -> TreeAction {
        let len = self.rows(tree).len();
        match key.code {
            code if keys::is_move_down(code) => self.cursor.next(len),
            code if keys::is_move_up(code) => self.cursor.prev(),
            keys::GO_TOP => self.cursor.top(),
            keys::GO_BOTTOM => self.cursor.bottom(len),
            keys::EXPAND => return self.toggle(tree),
            keys::NODE_LOG => {
                if let Some(id) = self.selected(tree) {
                    return TreeAction::ShowLog(tree.full_path(id));
                }
            }
            keys::DIFF => {
                if let Some(id) = self.selected(tree) {
                    return TreeAction::Diff(tree.full_path(id));
                }
            }
            _ => {}
        }
        TreeAction::None
    }

    /// Fold an open directory, or unfold it and ask for a listing
    fn toggle(&mut self, tree: &RepoTree) -> TreeAction {
        let Some(id) = self.selected(tree) else {
            return TreeAction::None;
        };
        let Some(item) = tree.get(id) else {
            return TreeAction::None;
        };
        if !item.is_directory() {
            return TreeAction::None;
        }

        let path = tree.full_path(id);
        if self.collapsed.remove(&path) {
            return TreeAction::None;
        }
        if item.listed {
            self.collapsed.insert(path);
            return TreeAction::None;
        }
        TreeAction::Expand(path)
    }
}
