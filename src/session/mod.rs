//! Repository session
//!
//! A [`Session`] owns the repository state for one working copy and runs
//! svn commands against it in the background. Callers get a receiver of
//! [`SessionEvent`]s and re-read state through the snapshot accessors.

mod dispatcher;
mod event;
mod state;

pub use dispatcher::{Dispatcher, TaskId};
pub use event::{EventSender, SessionEvent, channel};
pub use state::{Reaction, RepoState};

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::Config;
use crate::model::{Change, RepoTree, Revision};
use crate::svn::{CommandLog, SvnCommand, SvnError, SvnExecutor};

struct Shared {
    state: Mutex<RepoState>,
    dispatcher: Dispatcher,
    executor: SvnExecutor,
    events: EventSender,
    log_limit: u32,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, RepoState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start `command` on a worker that merges its result when done
    ///
    /// Takes only the registry lock, so it is safe to call while holding
    /// the state lock.
    fn launch(self: &Arc<Self>, command: SvnCommand) -> Result<TaskId, SvnError> {
        let worker = Arc::clone(self);
        let task_command = command.clone();
        self.dispatcher
            .launch(command, move |_| worker.complete(&task_command))
    }

    fn complete(self: &Arc<Self>, command: &SvnCommand) {
        let result = command.execute(&self.executor);
        if let Err(error) = &result {
            tracing::debug!(command = %command.kind(), %error, "command returned an error");
        }

        let mut state = self.state();
        let mut reaction = state.apply(command, result);

        for follow_up in reaction.follow_ups.drain(..) {
            match self.launch(follow_up.clone()) {
                Ok(_) => {}
                Err(SvnError::ShuttingDown) => {
                    tracing::debug!(command = %follow_up.kind(), "not chained, shutting down");
                }
                Err(error) => {
                    state.push_error(format!("{} failed: {error}", follow_up.kind()));
                    reaction.events.push(SessionEvent::Errors);
                }
            }
        }

        for event in reaction.events {
            self.events.notify(event);
        }
    }
}

/// One open repository and its background commands
///
/// Dropping the session waits for every in-flight command.
pub struct Session {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("executor", &self.shared.executor)
            .field("pending", &self.shared.dispatcher.pending_count())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create an empty session; call [`Session::open`] to load a repository
    pub fn new(config: &Config, log: Arc<dyn CommandLog>) -> (Self, Receiver<SessionEvent>) {
        let (events, rx) = channel(config.event_capacity);
        let shared = Shared {
            state: Mutex::new(RepoState::default()),
            dispatcher: Dispatcher::new(),
            executor: config.executor(log),
            events,
            log_limit: config.log_limit,
        };
        (
            Self {
                shared: Arc::new(shared),
            },
            rx,
        )
    }

    /// Point the session at a working copy and start loading it
    ///
    /// Resets all state, then runs `svn info`, which chains the tree
    /// listing, history and status loads. Refused once shutdown has begun,
    /// leaving the state untouched.
    pub fn open(&self, repo_path: impl Into<String>) -> Result<TaskId, SvnError> {
        let repo_path = repo_path.into();
        if repo_path.trim().is_empty() {
            return Err(SvnError::InvalidInput("repository path is empty".into()));
        }
        if self.shared.dispatcher.is_closing() {
            return Err(SvnError::ShuttingDown);
        }

        let command = {
            let mut state = self.shared.state();
            *state = RepoState::new(repo_path, self.shared.log_limit);
            state.refresh_command()
        };
        tracing::info!(command = %command.kind(), "opening repository");
        self.shared.launch(command)
    }

    pub fn is_initialized(&self) -> bool {
        self.shared.state().is_initialized()
    }

    fn repo_command(
        &self,
        build: impl FnOnce(&RepoState) -> SvnCommand,
    ) -> Result<TaskId, SvnError> {
        let command = {
            let state = self.shared.state();
            if !state.is_initialized() {
                return Err(SvnError::InvalidInput("no repository is open".into()));
            }
            build(&state)
        };
        self.shared.launch(command)
    }

    /// Reload everything, starting from `svn info`
    pub fn refresh(&self) -> Result<TaskId, SvnError> {
        self.repo_command(RepoState::refresh_command)
    }

    /// Load the history of `url` (a subpath or URL) into the revision list
    pub fn view_log(&self, url: impl Into<String>) -> Result<TaskId, SvnError> {
        let path = url.into();
        self.repo_command(|state| SvnCommand::Log {
            path,
            limit: state.log_limit(),
        })
    }

    pub fn update_to_head(&self) -> Result<TaskId, SvnError> {
        self.repo_command(|state| SvnCommand::Update {
            path: state.repo_path().to_string(),
            revision: None,
        })
    }

    pub fn update_to_revision(&self, revision: u64) -> Result<TaskId, SvnError> {
        self.repo_command(|state| SvnCommand::Update {
            path: state.repo_path().to_string(),
            revision: Some(revision),
        })
    }

    /// Re-read local modifications (`svn status`)
    pub fn check_for_modifications(&self) -> Result<TaskId, SvnError> {
        self.repo_command(|state| SvnCommand::Status {
            path: state.repo_path().to_string(),
        })
    }

    /// Commit `items` with `message`
    ///
    /// Empty selections and blank messages are rejected here, before any
    /// command is launched.
    pub fn commit(&self, items: Vec<String>, message: impl Into<String>) -> Result<TaskId, SvnError> {
        let message = message.into();
        if items.is_empty() {
            return Err(SvnError::InvalidInput("nothing selected to commit".into()));
        }
        if message.trim().is_empty() {
            return Err(SvnError::InvalidInput("commit message is empty".into()));
        }
        self.repo_command(|_| SvnCommand::Commit { items, message })
    }

    /// Open the external diff tool for `item`, optionally at one revision
    pub fn launch_diff_viewer(
        &self,
        item: impl Into<String>,
        revision: Option<u64>,
    ) -> Result<TaskId, SvnError> {
        let path = item.into();
        self.repo_command(|_| SvnCommand::LaunchExternalDiff { path, revision })
    }

    pub fn add_to_source_control(&self, item: impl Into<String>) -> Result<TaskId, SvnError> {
        let item = item.into();
        self.repo_command(|_| SvnCommand::Add { item })
    }

    pub fn revert(&self, item: impl Into<String>) -> Result<TaskId, SvnError> {
        let item = item.into();
        self.repo_command(|_| SvnCommand::Revert { item })
    }

    /// List the children of the tree node at `full_path`
    ///
    /// Returns `Ok(None)` without launching when no such node exists.
    pub fn list_content(&self, full_path: &str) -> Result<Option<TaskId>, SvnError> {
        {
            let state = self.shared.state();
            if state.tree().and_then(|tree| tree.find(full_path)).is_none() {
                tracing::debug!(full_path, "no such node, not listing");
                return Ok(None);
            }
        }
        let command = SvnCommand::List {
            full_path: full_path.to_string(),
        };
        self.shared.launch(command).map(Some)
    }

    /// Snapshot of revision `number`, fetching its affected items if needed
    ///
    /// The fetch is launched at most once while it is outstanding. The
    /// returned snapshot has `loading` set in that case; the items arrive
    /// later with [`SessionEvent::AffectedItemsUpdated`].
    pub fn get_change_set(&self, number: u64) -> Result<Revision, SvnError> {
        let mut state = self.shared.state();
        let (revision, fetch) = match state.request_change_set(number) {
            Ok(found) => found,
            Err(error) => {
                self.shared.events.notify(SessionEvent::Errors);
                return Err(error);
            }
        };

        if let Some(command) = fetch {
            if let Err(error) = self.shared.launch(command) {
                state.cancel_change_set_fetch(number);
                return Err(error);
            }
        }
        Ok(revision)
    }

    pub fn revisions(&self) -> Vec<Revision> {
        self.shared.state().revisions().to_vec()
    }

    pub fn changes(&self) -> Vec<Change> {
        self.shared.state().changes().to_vec()
    }

    /// Local changes without unversioned (`?`) entries
    pub fn tracked_changes(&self) -> Vec<Change> {
        self.shared.state().tracked_changes()
    }

    pub fn current_revision(&self) -> Option<u64> {
        self.shared.state().current_revision()
    }

    pub fn repo_path(&self) -> String {
        self.shared.state().repo_path().to_string()
    }

    pub fn repo_url(&self) -> String {
        self.shared.state().repo_url().to_string()
    }

    /// Copy of the repository tree, `None` before [`Session::open`]
    pub fn repo_content(&self) -> Option<RepoTree> {
        self.shared.state().tree().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.shared.state().errors().to_vec()
    }

    /// Drain the error list
    pub fn take_errors(&self) -> Vec<String> {
        self.shared.state().take_errors()
    }

    /// Consistent copy of the whole state, taken under one lock
    pub fn snapshot(&self) -> RepoState {
        self.shared.state().clone()
    }

    pub fn pending_count(&self) -> usize {
        self.shared.dispatcher.pending_count()
    }

    pub fn pending_commands(&self) -> Vec<SvnCommand> {
        self.shared.dispatcher.pending_commands()
    }

    /// Refuse new commands and wait for the in-flight ones
    pub fn shutdown(&self) {
        self.shared.dispatcher.shutdown();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
