//! Application state and pane focus

use std::sync::mpsc::Receiver;

use crate::model::{Notification, Revision};
use crate::session::{RepoState, Session, SessionEvent, TaskId};
use crate::svn::SvnError;
use crate::ui::views::{ChangesView, RevisionsView, TreeView};

/// Focusable panes of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Revisions,
    Changes,
    Tree,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Revisions => Pane::Changes,
            Pane::Changes => Pane::Tree,
            Pane::Tree => Pane::Revisions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Revisions => Pane::Tree,
            Pane::Changes => Pane::Revisions,
            Pane::Tree => Pane::Changes,
        }
    }
}

/// The main application state
///
/// Holds a snapshot of the session state, refreshed whenever the session
/// reports a change.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub focus: Pane,
    pub(crate) session: Session,
    pub(crate) events: Receiver<SessionEvent>,
    /// Last snapshot of the repository state
    pub(crate) state: RepoState,
    /// Commands in flight at the last tick
    pub(crate) pending: usize,
    pub revisions_view: RevisionsView,
    pub changes_view: ChangesView,
    pub tree_view: TreeView,
    /// Revision shown in the changeset pane
    pub(crate) change_set: Option<Revision>,
    /// Errors not yet dismissed, oldest first
    pub(crate) errors: Vec<String>,
    pub notification: Option<Notification>,
}

impl App {
    pub fn new(session: Session, events: Receiver<SessionEvent>) -> Self {
        let state = session.snapshot();
        Self {
            running: true,
            focus: Pane::default(),
            session,
            events,
            state,
            pending: 0,
            revisions_view: RevisionsView::new(),
            changes_view: ChangesView::new(),
            tree_view: TreeView::new(),
            change_set: None,
            errors: Vec::new(),
            notification: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Errors waiting to be dismissed
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn change_set(&self) -> Option<&Revision> {
        self.change_set.as_ref()
    }

    /// Turn the outcome of a session request into user feedback
    pub(crate) fn report(&mut self, what: impl std::fmt::Display, result: Result<TaskId, SvnError>) {
        self.notification = Some(match result {
            Ok(_) => Notification::started(what),
            Err(error) => Notification::warning(format!("{what}: {error}")),
        });
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }
}
