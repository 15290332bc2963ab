//! Repository tree pane
//!
//! Directories are listed on demand the first time they are expanded.

mod input;
mod render;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::model::{NodeId, RepoTree};
use crate::ui::navigation::ListCursor;

/// Action returned from TreeView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeAction {
    /// List the children of a directory
    Expand(String),
    /// Load the history of a node into the revisions pane
    ShowLog(String),
    /// Open the external diff tool on a node
    Diff(String),
    None,
}

/// Repository tree pane state
#[derive(Debug, Default)]
pub struct TreeView {
    pub(super) cursor: ListCursor,
    /// Full paths of directories folded by the user
    pub(super) collapsed: HashSet<String>,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible rows as (node, depth), skipping folded subtrees
    pub fn rows(&self, tree: &RepoTree) -> Vec<(NodeId, usize)> {
        let mut rows = Vec::new();
        let mut hidden_below: Option<usize> = None;
        for (id, depth) in tree.walk() {
            if let Some(limit) = hidden_below {
                if depth > limit {
                    continue;
                }
                hidden_below = None;
            }
            if self.collapsed.contains(&tree.full_path(id)) {
                hidden_below = Some(depth);
            }
            rows.push((id, depth));
        }
        rows
    }

    pub fn selected(&self, tree: &RepoTree) -> Option<NodeId> {
        self.rows(tree).get(self.cursor.selected()).map(|(id, _)| *id)
    }

    pub fn sync(&mut self, tree: &RepoTree) {
        let len = self.rows(tree).len();
        self.cursor.clamp(len);
    }
}
