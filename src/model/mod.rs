//! Data models for svnview
//!
//! This module contains UI-independent data structures representing
//! svn concepts like revisions, local changes, and the repository tree.

mod change;
mod notification;
mod repo_item;
mod revision;

pub use change::Change;
pub use notification::{Notification, NotificationKind};
pub use repo_item::{ItemKind, ListEntry, NodeId, RepoItem, RepoTree};
pub use revision::{RepoInfo, Revision, filter_revisions};
