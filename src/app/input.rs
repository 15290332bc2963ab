//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, Pane};
use crate::keys;
use crate::model::Notification;
use crate::svn::CommandKind;
use crate::ui::views::{ChangesAction, RevisionsAction, RevisionsInputMode, TreeAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Any key acknowledges the oldest error
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // Text entry owns the keyboard until it is closed
        if self.changes_view.is_composing() {
            self.handle_changes_key(key);
            return;
        }
        if self.revisions_view.input_mode == RevisionsInputMode::Filter {
            self.handle_revisions_key(key);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        match self.focus {
            Pane::Revisions => self.handle_revisions_key(key),
            Pane::Changes => self.handle_changes_key(key),
            Pane::Tree => self.handle_tree_key(key),
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_refresh_key(&key) {
            self.refresh();
            return true;
        }
        match key.code {
            keys::QUIT => self.quit(),
            keys::TAB => self.focus = self.focus.next(),
            keys::BACK_TAB => self.focus = self.focus.prev(),
            keys::REFRESH => self.refresh(),
            keys::CHECK_MODIFICATIONS => {
                let result = self.session.check_for_modifications();
                self.report(CommandKind::Status, result);
            }
            keys::UPDATE => {
                let result = self.session.update_to_head();
                self.report(CommandKind::Update, result);
            }
            _ => return false,
        }
        true
    }

    fn refresh(&mut self) {
        let result = self.session.refresh();
        self.report(CommandKind::Info, result);
    }

    fn handle_revisions_key(&mut self, key: KeyEvent) {
        let action = self.revisions_view.handle_key(key, self.state.revisions());
        match action {
            RevisionsAction::None => {}
            RevisionsAction::ShowChangeSet(number) => self.show_change_set(number),
            RevisionsAction::UpdateTo(number) => {
                let result = self.session.update_to_revision(number);
                self.report(format!("{} -r {number}", CommandKind::Update), result);
            }
        }
    }

    fn show_change_set(&mut self, number: u64) {
        match self.session.get_change_set(number) {
            Ok(revision) => self.change_set = Some(revision),
            Err(error) => {
                self.change_set = None;
                self.errors.extend(self.session.take_errors());
                tracing::debug!(%error, "changeset not shown");
            }
        }
    }

    fn handle_changes_key(&mut self, key: KeyEvent) {
        let action = self.changes_view.handle_key(key, self.state.changes());
        match action {
            ChangesAction::None => {}
            ChangesAction::Diff(item) => {
                let result = self.session.launch_diff_viewer(item, None);
                self.report(CommandKind::LaunchExternalDiff, result);
            }
            ChangesAction::Add(item) => {
                let result = self.session.add_to_source_control(item);
                self.report(CommandKind::Add, result);
            }
            ChangesAction::Revert(item) => {
                let result = self.session.revert(item);
                self.report(CommandKind::Revert, result);
            }
            ChangesAction::Commit { message } => {
                let items = self
                    .session
                    .tracked_changes()
                    .into_iter()
                    .map(|c| c.item)
                    .collect();
                let result = self.session.commit(items, message);
                self.report(CommandKind::Commit, result);
            }
            ChangesAction::Refused(reason) => {
                self.notification = Some(Notification::warning(reason));
            }
        }
    }

    fn handle_tree_key(&mut self, key: KeyEvent) {
        let Some(tree) = self.state.tree() else {
            return;
        };
        let action = self.tree_view.handle_key(key, tree);
        match action {
            TreeAction::None => {}
            TreeAction::Expand(path) => match self.session.list_content(&path) {
                Ok(Some(_)) => {
                    self.notification = Some(Notification::started(CommandKind::List));
                }
                Ok(None) => {}
                Err(error) => self.report(CommandKind::List, Err(error)),
            },
            TreeAction::ShowLog(path) => {
                let result = self.session.view_log(path);
                self.report(CommandKind::Log, result);
            }
            TreeAction::Diff(path) => {
                let result = self.session.launch_diff_viewer(path, None);
                self.report(CommandKind::LaunchExternalDiff, result);
            }
        }
    }
}
