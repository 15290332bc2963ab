//! Local changes pane input handling

use crossterm::event::KeyEvent;

use super::{ChangesAction, ChangesView};
use crate::keys;
use crate::model::Change;

impl ChangesView {
    pub fn handle_key(&mut self, key: KeyEvent, changes: &[Change]) -> ChangesAction {
        if self.textarea.is_some() {
            return self.handle_commit_key(key);
        }

        match key.code {
            code if keys::is_move_down(code) => self.cursor.next(changes.len()),
            code if keys::is_move_up(code) => self.cursor.prev(),
            keys::GO_TOP => self.cursor.top(),
            keys::GO_BOTTOM => self.cursor.bottom(changes.len()),
            keys::DIFF => {
                if let Some(change) = self.selected(changes) {
                    if change.is_unversioned() {
                        return ChangesAction::Refused(format!("{} is not versioned", change.item));
                    }
                    return ChangesAction::Diff(change.item.clone());
                }
            }
            keys::ADD => {
                if let Some(change) = self.selected(changes) {
                    if !change.is_unversioned() {
                        return ChangesAction::Refused(format!(
                            "{} is already versioned",
                            change.item
                        ));
                    }
                    return ChangesAction::Add(change.item.clone());
                }
            }
            keys::REVERT => {
                if let Some(change) = self.selected(changes) {
                    return ChangesAction::Revert(change.item.clone());
                }
            }
            keys::COMMIT => {
                if changes.iter().all(Change::is_unversioned) {
                    return ChangesAction::Refused("nothing to commit".to_string());
                }
                self.start_commit();
            }
            _ => {}
        }
        ChangesAction::None
    }

    fn handle_commit_key(&mut self, key: KeyEvent) -> ChangesAction {
        if keys::is_save_key(&key) {
            let Some(textarea) = self.textarea.take() else {
                return ChangesAction::None;
            };
            let message = textarea.lines().join("\n");
            if message.trim().is_empty() {
                return ChangesAction::Refused("commit message is empty".to_string());
            }
            return ChangesAction::Commit { message };
        }

        if key.code == keys::ESC {
            self.cancel_commit();
            return ChangesAction::None;
        }

        if let Some(textarea) = self.textarea.as_mut() {
            textarea.input(key);
        }
        ChangesAction::None
    }
}
