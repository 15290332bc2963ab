//! svn-specific constants
//!
//! Centralized definitions for svn command names, flags, and output markers.

/// svn command binary name
pub const SVN_COMMAND: &str = "svn";

/// External diff viewer launched by `svn diff --diff-cmd`
pub const DEFAULT_DIFF_TOOL: &str = "meld";

/// Number of revisions requested by `svn log -l`
pub const DEFAULT_LOG_LIMIT: u32 = 2500;

/// Capacity of the session event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// File name of the commit message file inside the temp directory
pub const COMMIT_MESSAGE_FILE: &str = "commit-message.txt";

/// svn subcommands
pub mod commands {
    pub const INFO: &str = "info";
    pub const LOG: &str = "log";
    pub const STATUS: &str = "status";
    pub const DIFF: &str = "diff";
    pub const LIST: &str = "list";
    pub const UPDATE: &str = "update";
    pub const ADD: &str = "add";
    pub const REVERT: &str = "revert";
    pub const COMMIT: &str = "commit";
}

/// svn command flags
pub mod flags {
    /// Limit the number of log entries
    pub const LIMIT: &str = "-l";
    /// Select the change made by a revision
    pub const CHANGE: &str = "-c";
    /// Select a revision
    pub const REVISION: &str = "-r";
    /// Print only changed paths for `diff`
    pub const SUMMARIZE: &str = "--summarize";
    /// Never prompt
    pub const NON_INTERACTIVE: &str = "--non-interactive";
    /// Read the log message from a file
    pub const MESSAGE_FILE: &str = "-F";
    /// Use an external diff program
    pub const DIFF_CMD: &str = "--diff-cmd";
}

/// Markers in svn output
pub mod markers {
    /// `svn info` line holding the last changed revision
    pub const LAST_CHANGED_REV: &str = "Last Changed Rev: ";
    /// `svn info` line holding the canonical URL
    pub const URL: &str = "URL: ";
    /// Character repeated on the line between `svn log` entries
    pub const LOG_DIVIDER_CHAR: char = '-';
    /// Suffix of directory entries in `svn list`
    pub const DIRECTORY_SUFFIX: char = '/';
    /// Status code of unversioned items in `svn status`
    pub const UNVERSIONED: &str = "?";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svn_command_name() {
        assert_eq!(SVN_COMMAND, "svn");
    }

    #[test]
    fn test_info_markers_end_with_space() {
        assert!(markers::LAST_CHANGED_REV.ends_with(": "));
        assert!(markers::URL.ends_with(": "));
    }

    #[test]
    fn test_non_interactive_flag_format() {
        assert!(flags::NON_INTERACTIVE.starts_with("--"));
    }
}
