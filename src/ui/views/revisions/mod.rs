//! Revisions pane
//!
//! History of the repository, newest first, with a live text filter.

mod input;
mod render;


use crate::model::{Revision, filter_revisions};
use crate::ui::navigation::ListCursor;

/// Input mode for the revisions pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisionsInputMode {
    #[default]
    Normal,
    /// Typing into the filter
    Filter,
}

/// Action returned from RevisionsView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionsAction {
    /// Show the changeset of a revision
    ShowChangeSet(u64),
    /// Update the working copy to a revision
    UpdateTo(u64),
    None,
}

/// Revisions pane state
#[derive(Debug, Default)]
pub struct RevisionsView {
    pub(super) cursor: ListCursor,
    pub input_mode: RevisionsInputMode,
    pub(super) filter: String,
}

impl RevisionsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Revisions that pass the current filter
    pub fn visible<'a>(&self, revisions: &'a [Revision]) -> Vec<&'a Revision> {
        filter_revisions(revisions, &self.filter)
    }

    /// Number of the selected revision, if any row is visible
    pub fn selected_number(&self, revisions: &[Revision]) -> Option<u64> {
        self.visible(revisions)
            .get(self.cursor.selected())
            .map(|r| r.number)
    }

    /// Keep the selection valid after the revision list changed
    pub fn sync(&mut self, revisions: &[Revision]) {
        let len = self.visible(revisions).len();
        self.cursor.clamp(len);
    }
}
