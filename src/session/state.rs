//! Repository state and result reconciliation
//!
//! [`RepoState`] is the single source of truth for one session. Command
//! results are merged into it by [`RepoState::apply`], which never throws
//! away detail that a refresh did not replace.

use crate::model::{Change, ListEntry, RepoInfo, RepoTree, Revision};
use crate::svn::{CommandOutput, SvnCommand, SvnError};

use super::event::SessionEvent;

/// Current view of the repository
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoState {
    repo_path: String,
    repo_url: String,
    current_revision: Option<u64>,
    log_limit: u32,
    revisions: Vec<Revision>,
    changes: Vec<Change>,
    tree: Option<RepoTree>,
    errors: Vec<String>,
}

/// What has to happen after a merge
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Events for the presentation layer
    pub events: Vec<SessionEvent>,
    /// Commands to launch next
    pub follow_ups: Vec<SvnCommand>,
}

impl RepoState {
    /// State for a freshly opened working copy
    pub fn new(repo_path: impl Into<String>, log_limit: u32) -> Self {
        let repo_path = repo_path.into();
        Self {
            tree: Some(RepoTree::new(repo_path.clone())),
            repo_path,
            log_limit,
            ..Self::default()
        }
    }

    pub fn is_initialized(&self) -> bool {
        !self.repo_path.is_empty()
    }

    pub fn repo_path(&self) -> &str {
        &self.repo_path
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    pub fn current_revision(&self) -> Option<u64> {
        self.current_revision
    }

    pub fn log_limit(&self) -> u32 {
        self.log_limit
    }

    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Changes of versioned items only (no `?` entries)
    pub fn tracked_changes(&self) -> Vec<Change> {
        self.changes
            .iter()
            .filter(|c| !c.is_unversioned())
            .cloned()
            .collect()
    }

    pub fn tree(&self) -> Option<&RepoTree> {
        self.tree.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<String> {
        std::mem::take(&mut self.errors)
    }

    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Command that re-reads everything: `svn info` on the working copy
    pub fn refresh_command(&self) -> SvnCommand {
        SvnCommand::Info {
            path: self.repo_path.clone(),
        }
    }

    /// Look up a changeset, deciding whether its affected items must be fetched
    ///
    /// The last revision with a matching number wins. When the match has
    /// no affected items and no fetch is outstanding, it is marked as
    /// loading and the fetch command is returned alongside the snapshot.
    pub fn request_change_set(
        &mut self,
        number: u64,
    ) -> Result<(Revision, Option<SvnCommand>), SvnError> {
        let Some(revision) = self.revisions.iter_mut().rfind(|r| r.number == number) else {
            let error = SvnError::UnknownRevision(number);
            self.errors.push(error.to_string());
            return Err(error);
        };

        let fetch = if revision.affected_items.is_empty() && !revision.loading {
            revision.loading = true;
            Some(SvnCommand::DiffSummary {
                path: self.repo_url.clone(),
                revision: number,
            })
        } else {
            None
        };

        Ok((revision.clone(), fetch))
    }

    /// Give up on an affected-items fetch that could not be started
    pub fn cancel_change_set_fetch(&mut self, number: u64) {
        if let Some(revision) = self.revisions.iter_mut().rfind(|r| r.number == number) {
            revision.loading = false;
        }
    }

    /// Merge the result of `command` into the state
    pub fn apply(
        &mut self,
        command: &SvnCommand,
        result: Result<CommandOutput, SvnError>,
    ) -> Reaction {
        let output = match result {
            Ok(output) => output,
            Err(error) => return self.record_failure(command, &error),
        };

        match output {
            CommandOutput::Info(info) => self.merge_info(info),
            CommandOutput::Log(revisions) => self.merge_log(revisions),
            CommandOutput::Status(changes) => self.merge_status(changes),
            CommandOutput::List { full_path, entries } => self.merge_list(&full_path, entries),
            CommandOutput::DiffSummary { revision, items } => {
                self.merge_affected_items(revision, items)
            }
            CommandOutput::Done if command.kind().is_mutating() => Reaction {
                follow_ups: vec![self.refresh_command()],
                ..Reaction::default()
            },
            CommandOutput::Done | CommandOutput::Launched => Reaction::default(),
        }
    }

    fn record_failure(&mut self, command: &SvnCommand, error: &SvnError) -> Reaction {
        tracing::warn!(command = %command.kind(), %error, "command failed");
        self.errors.push(format!("{} failed: {error}", command.kind()));

        if let SvnCommand::DiffSummary { revision, .. } = command {
            self.cancel_change_set_fetch(*revision);
        }

        Reaction {
            events: vec![SessionEvent::Errors],
            follow_ups: Vec::new(),
        }
    }

    fn merge_info(&mut self, info: RepoInfo) -> Reaction {
        self.current_revision = Some(info.last_changed_rev);
        self.repo_url = info.url;

        let root = match &self.tree {
            Some(tree) => tree.full_path(tree.root()),
            None => self.repo_path.clone(),
        };

        Reaction {
            events: Vec::new(),
            follow_ups: vec![
                SvnCommand::List { full_path: root },
                SvnCommand::Log {
                    path: self.repo_url.clone(),
                    limit: self.log_limit,
                },
                SvnCommand::Status {
                    path: self.repo_path.clone(),
                },
            ],
        }
    }

    /// Replace the history, carrying fetched detail over by revision number
    fn merge_log(&mut self, mut revisions: Vec<Revision>) -> Reaction {
        let old = std::mem::take(&mut self.revisions);

        for new in &mut revisions {
            if let Some(previous) = old.iter().find(|r| r.number == new.number) {
                new.affected_items = previous.affected_items.clone();
                new.loading = previous.loading;
            }
        }
        self.revisions = revisions;

        Reaction {
            events: vec![SessionEvent::RevisionsUpdated],
            follow_ups: Vec::new(),
        }
    }

    fn merge_status(&mut self, changes: Vec<Change>) -> Reaction {
        self.changes = changes;
        Reaction {
            events: vec![SessionEvent::ChangesUpdated],
            follow_ups: Vec::new(),
        }
    }

    fn merge_list(&mut self, full_path: &str, entries: Vec<ListEntry>) -> Reaction {
        let replaced = self.tree.as_mut().is_some_and(|tree| match tree.find(full_path) {
            Some(node) => tree.replace_children(node, entries),
            None => false,
        });

        if !replaced {
            tracing::debug!(full_path, "listed node is gone, dropping listing");
            return Reaction::default();
        }

        Reaction {
            events: vec![SessionEvent::TreeUpdated {
                path: full_path.to_string(),
            }],
            follow_ups: Vec::new(),
        }
    }

    fn merge_affected_items(&mut self, number: u64, items: Vec<String>) -> Reaction {
        // Same match as `request_change_set`, so the entry marked loading is filled
        let Some(revision) = self.revisions.iter_mut().rfind(|r| r.number == number) else {
            tracing::debug!(revision = number, "revision is gone, dropping affected items");
            return Reaction::default();
        };

        if items.is_empty() {
            revision.loading = false;
            return Reaction::default();
        }

        revision.loading = false;
        revision.affected_items = items;

        Reaction {
            events: vec![SessionEvent::AffectedItemsUpdated { revision: number }],
            follow_ups: Vec::new(),
        }
    }
}
