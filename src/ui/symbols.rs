//! UI symbols (markers, labels)

/// Row markers
pub mod markers {
    /// Revision the working copy is at
    pub const CURRENT: char = '@';
    /// Any other revision
    pub const NORMAL: char = '○';
    /// Directory whose children are loaded
    pub const EXPANDED: char = '▾';
    /// Directory not listed yet
    pub const COLLAPSED: char = '▸';
    /// File
    pub const FILE: char = '·';
}

/// Empty state indicators
pub mod empty {
    pub const LOADING: &str = "Loading...";
    pub const FETCHING_ITEMS: &str = "Fetching affected items...";
    pub const NO_REVISION_SELECTED: &str = "No revision selected.";
    pub const CLEAN: &str = "Working copy is clean.";
    pub const NO_MATCHES: &str = "No revisions match the filter.";
}
