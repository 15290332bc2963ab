//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the revisions pane
pub mod revisions {
    use super::*;

    /// Revision number
    pub const NUMBER: Color = Color::Yellow;
    /// Author name
    pub const AUTHOR: Color = Color::Cyan;
    /// Date string
    pub const DATE: Color = Color::DarkGray;
    /// Marker of the working copy's revision
    pub const CURRENT_MARKER: Color = Color::Green;
    /// Revisions the working copy does not have yet
    pub const NEWER: Color = Color::Blue;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for svn status codes
pub mod status {
    use super::*;

    pub const ADDED: Color = Color::Green;
    pub const MODIFIED: Color = Color::Yellow;
    pub const DELETED: Color = Color::Red;
    pub const CONFLICTED: Color = Color::Magenta;
    pub const UNVERSIONED: Color = Color::DarkGray;
    pub const MISSING: Color = Color::LightRed;
    pub const OTHER: Color = Color::Reset;

    /// Color for the first character of an `svn status` line
    pub fn color_for(code: &str) -> Color {
        match code.chars().next() {
            Some('A') => ADDED,
            Some('M') | Some('R') => MODIFIED,
            Some('D') => DELETED,
            Some('C') => CONFLICTED,
            Some('?') => UNVERSIONED,
            Some('!') => MISSING,
            _ => OTHER,
        }
    }
}

/// Colors for the repository tree
pub mod tree {
    use super::*;

    pub const DIRECTORY: Color = Color::Blue;
    pub const FILE: Color = Color::Reset;
}

/// Border colors
pub mod pane {
    use super::*;

    pub const FOCUSED: Color = Color::Cyan;
    pub const UNFOCUSED: Color = Color::DarkGray;
}
