//! Keybinding definitions for svnview
//!
//! All keybindings are defined here so panes and the status bar agree.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+S (save commit message)
pub fn is_save_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Focus next pane
pub const TAB: KeyCode = KeyCode::Tab;

/// Focus previous pane
pub const BACK_TAB: KeyCode = KeyCode::BackTab;

/// Cancel input / clear filter
pub const ESC: KeyCode = KeyCode::Esc;

/// Re-read the whole repository
pub const REFRESH: KeyCode = KeyCode::Char('r');

/// Re-read local modifications only
pub const CHECK_MODIFICATIONS: KeyCode = KeyCode::Char('s');

/// Update working copy to HEAD
pub const UPDATE: KeyCode = KeyCode::Char('u');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Input keys
// =============================================================================

/// Submit input (Enter in filter mode)
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Revisions pane
// =============================================================================

/// Show affected items of the selected revision
pub const SHOW_CHANGE_SET: KeyCode = KeyCode::Enter;

/// Start filtering revisions
pub const FILTER: KeyCode = KeyCode::Char('/');

/// Update working copy to the selected revision
pub const UPDATE_TO_REVISION: KeyCode = KeyCode::Char('U');

// =============================================================================
// Local changes / tree panes
// =============================================================================

/// Open the external diff tool
pub const DIFF: KeyCode = KeyCode::Char('d');

/// Schedule an unversioned item for addition
pub const ADD: KeyCode = KeyCode::Char('a');

/// Revert the selected item
pub const REVERT: KeyCode = KeyCode::Char('R');

/// Commit all tracked changes
pub const COMMIT: KeyCode = KeyCode::Char('C');

/// Expand a directory in the tree
pub const EXPAND: KeyCode = KeyCode::Enter;

/// Show the history of the selected tree node
pub const NODE_LOG: KeyCode = KeyCode::Char('l');

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Pane",
    color: Color::Blue,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "r",
    label: "Refresh",
    color: Color::Cyan,
};
pub const HINT_UPDATE: KeyHint = KeyHint {
    key: "u",
    label: "Update",
    color: Color::Yellow,
};
pub const HINT_CHANGE_SET: KeyHint = KeyHint {
    key: "Enter",
    label: "Changeset",
    color: Color::Green,
};
pub const HINT_FILTER: KeyHint = KeyHint {
    key: "/",
    label: "Filter",
    color: Color::Cyan,
};
pub const HINT_UPDATE_TO: KeyHint = KeyHint {
    key: "U",
    label: "Update to",
    color: Color::Yellow,
};
pub const HINT_DIFF: KeyHint = KeyHint {
    key: "d",
    label: "Diff",
    color: Color::Magenta,
};
pub const HINT_ADD: KeyHint = KeyHint {
    key: "a",
    label: "Add",
    color: Color::Green,
};
pub const HINT_REVERT: KeyHint = KeyHint {
    key: "R",
    label: "Revert",
    color: Color::Red,
};
pub const HINT_COMMIT: KeyHint = KeyHint {
    key: "C",
    label: "Commit",
    color: Color::Green,
};
pub const HINT_EXPAND: KeyHint = KeyHint {
    key: "Enter",
    label: "Expand",
    color: Color::Green,
};
pub const HINT_NODE_LOG: KeyHint = KeyHint {
    key: "l",
    label: "Log",
    color: Color::Cyan,
};
pub const HINT_SAVE: KeyHint = KeyHint {
    key: "^S",
    label: "Commit",
    color: Color::Green,
};
pub const HINT_APPLY: KeyHint = KeyHint {
    key: "Enter",
    label: "Apply",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

pub const REVISIONS_HINTS: &[KeyHint] = &[
    HINT_CHANGE_SET,
    HINT_FILTER,
    HINT_UPDATE_TO,
    HINT_UPDATE,
    HINT_REFRESH,
    HINT_SWITCH,
    HINT_QUIT,
];

pub const CHANGES_HINTS: &[KeyHint] = &[
    HINT_DIFF,
    HINT_ADD,
    HINT_REVERT,
    HINT_COMMIT,
    HINT_REFRESH,
    HINT_SWITCH,
    HINT_QUIT,
];

pub const TREE_HINTS: &[KeyHint] = &[
    HINT_EXPAND,
    HINT_NODE_LOG,
    HINT_DIFF,
    HINT_REFRESH,
    HINT_SWITCH,
    HINT_QUIT,
];

pub const FILTER_HINTS: &[KeyHint] = &[HINT_APPLY, HINT_CANCEL];

pub const COMMIT_HINTS: &[KeyHint] = &[HINT_SAVE, HINT_CANCEL];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_key_needs_control() {
        assert!(is_refresh_key(&KeyEvent::new(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_refresh_key(&KeyEvent::from(KeyCode::Char('l'))));
    }

    #[test]
    fn test_save_key_accepts_upper_case() {
        assert!(is_save_key(&KeyEvent::new(
            KeyCode::Char('S'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_move_keys() {
        assert!(is_move_up(KeyCode::Up));
        assert!(is_move_up(MOVE_UP));
        assert!(is_move_down(KeyCode::Down));
        assert!(!is_move_down(MOVE_UP));
    }

    #[test]
    fn test_every_pane_can_quit() {
        for hints in [REVISIONS_HINTS, CHANGES_HINTS, TREE_HINTS] {
            assert!(hints.iter().any(|h| h.key == "q"));
        }
    }
}
