//! Panes of the main screen

mod change_set;
mod changes;
mod revisions;
mod tree;

pub use change_set::render_change_set;
pub use changes::{ChangesAction, ChangesView};
pub use revisions::{RevisionsAction, RevisionsInputMode, RevisionsView};
pub use tree::{TreeAction, TreeView};
