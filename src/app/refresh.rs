//! Session event draining

use std::sync::mpsc::TryRecvError;

use super::state::App;
use crate::session::SessionEvent;

impl App {
    /// Apply every queued session event; returns whether anything changed
    ///
    /// Called on each idle tick of the main loop, never blocks.
    pub fn process_events(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.on_session_event(&event);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("session event channel closed");
                    break;
                }
            }
        }

        if changed {
            self.reload_snapshot();
        }
        let pending = self.session.pending_count();
        changed |= pending != self.pending;
        self.pending = pending;
        self.clear_expired_notification();
        changed
    }

    fn on_session_event(&mut self, event: &SessionEvent) {
        tracing::trace!(?event, "session event");
        if let SessionEvent::Errors = event {
            self.errors.extend(self.session.take_errors());
        }
    }

    /// Re-read state and keep selections and the changeset pane in step
    pub(crate) fn reload_snapshot(&mut self) {
        self.state = self.session.snapshot();
        self.revisions_view.sync(self.state.revisions());
        self.changes_view.sync(self.state.changes());
        if let Some(tree) = self.state.tree() {
            self.tree_view.sync(tree);
        }

        if let Some(shown) = &self.change_set {
            let number = shown.number;
            self.change_set = self
                .state
                .revisions()
                .iter()
                .rfind(|r| r.number == number)
                .cloned();
        }
    }
}
