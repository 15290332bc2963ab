//! Local change data model

use crate::svn::constants::markers;

/// One entry of `svn status`: a path and its status code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Change {
    /// Single-character status code (`M`, `A`, `D`, `?`, ...)
    pub status: String,

    /// Affected path, as printed by svn
    pub item: String,
}

impl Change {
    pub fn new(status: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            item: item.into(),
        }
    }

    /// Is this item not under version control?
    pub fn is_unversioned(&self) -> bool {
        self.status.starts_with(markers::UNVERSIONED)
    }
}
