//! Revisions pane input handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{RevisionsAction, RevisionsInputMode, RevisionsView};
use crate::keys;
use crate::model::Revision;

impl RevisionsView {
    /// Handle a key event against the current revision list
    pub fn handle_key(&mut self, key: KeyEvent, revisions: &[Revision]) -> RevisionsAction {
        match self.input_mode {
            RevisionsInputMode::Filter => self.handle_filter_key(key, revisions),
            RevisionsInputMode::Normal => self.handle_normal_key(key, revisions),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, revisions: &[Revision]) -> RevisionsAction {
        let len = self.visible(revisions).len();
        match key.code {
            code if keys::is_move_down(code) => self.cursor.next(len),
            code if keys::is_move_up(code) => self.cursor.prev(),
            keys::GO_TOP => self.cursor.top(),
            keys::GO_BOTTOM => self.cursor.bottom(len),
            keys::FILTER => self.input_mode = RevisionsInputMode::Filter,
            keys::ESC if !self.filter.is_empty() => {
                self.filter.clear();
                self.cursor.top();
            }
            keys::SHOW_CHANGE_SET => {
                if let Some(number) = self.selected_number(revisions) {
                    return RevisionsAction::ShowChangeSet(number);
                }
            }
            keys::UPDATE_TO_REVISION => {
                if let Some(number) = self.selected_number(revisions) {
                    return RevisionsAction::UpdateTo(number);
                }
            }
            _ => {}
        }
        RevisionsAction::None
    }

    fn handle_filter_key(&mut self, key: KeyEvent, revisions: &[Revision]) -> RevisionsAction {
        match key.code {
            keys::SUBMIT => self.input_mode = RevisionsInputMode::Normal,
            keys::ESC => {
                self.filter.clear();
                self.input_mode = RevisionsInputMode::Normal;
            }
            KeyCode::Backspace => {
                self.filter.pop();
            }
            KeyCode::Char(c) => self.filter.push(c),
            _ => return RevisionsAction::None,
        }
        self.cursor.top();
        self.sync(revisions);
        RevisionsAction::None
    }
}
