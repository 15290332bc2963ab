//! Local changes pane
//!
//! Output of `svn status` for the working copy, plus the commit message
//! editor.

mod input;
mod render;


use tui_textarea::TextArea;

use crate::model::Change;
use crate::ui::navigation::ListCursor;

/// Action returned from ChangesView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangesAction {
    /// Open the external diff tool on an item
    Diff(String),
    /// Schedule an unversioned item for addition
    Add(String),
    /// Revert local modifications of an item
    Revert(String),
    /// Commit every tracked change with this message
    Commit { message: String },
    /// Key was understood but the request makes no sense here
    Refused(String),
    None,
}

/// Local changes pane state
#[derive(Debug, Default)]
pub struct ChangesView {
    pub(super) cursor: ListCursor,
    /// Commit message editor, open while composing
    pub(crate) textarea: Option<TextArea<'static>>,
}

impl ChangesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_composing(&self) -> bool {
        self.textarea.is_some()
    }

    pub fn selected<'a>(&self, changes: &'a [Change]) -> Option<&'a Change> {
        changes.get(self.cursor.selected())
    }

    pub fn start_commit(&mut self) {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("Commit message");
        self.textarea = Some(textarea);
    }

    pub fn cancel_commit(&mut self) {
        self.textarea = None;
    }

    pub fn sync(&mut self, changes: &[Change]) {
        self.cursor.clamp(changes.len());
    }
}
