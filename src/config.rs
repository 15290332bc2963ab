//! Runtime configuration
//!
//! Defaults live in [`crate::svn::constants`]; the binary overrides them
//! from command-line flags.

use std::path::PathBuf;
use std::sync::Arc;

use crate::svn::{CommandLog, SvnExecutor, constants};

/// Settings shared by the session and the executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// svn binary to run
    pub svn_command: String,
    /// Program passed to `svn diff --diff-cmd`
    pub diff_tool: String,
    /// Number of revisions fetched per history refresh
    pub log_limit: u32,
    /// Directory for the commit message file
    pub temp_dir: PathBuf,
    /// Capacity of the session event channel
    pub event_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svn_command: constants::SVN_COMMAND.to_string(),
            diff_tool: constants::DEFAULT_DIFF_TOOL.to_string(),
            log_limit: constants::DEFAULT_LOG_LIMIT,
            temp_dir: std::env::temp_dir().join("svnview"),
            event_capacity: constants::DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl Config {
    /// Build an executor for these settings, auditing into `log`
    pub fn executor(&self, log: Arc<dyn CommandLog>) -> SvnExecutor {
        SvnExecutor::new(
            self.svn_command.clone(),
            self.diff_tool.clone(),
            self.temp_dir.clone(),
            log,
        )
    }
}
