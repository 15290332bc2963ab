//! svn command executor
//!
//! Handles running svn commands and capturing their output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::audit::{AuditEntry, CommandLog, TracingLog};
use super::command::CommandLine;
use super::constants;

/// Executor for svn commands
#[derive(Clone)]
pub struct SvnExecutor {
    /// svn binary to invoke
    program: String,
    /// External diff viewer passed to `--diff-cmd`
    diff_tool: String,
    /// Directory holding the commit message file
    temp_dir: PathBuf,
    /// Audit sink, one entry per invocation
    log: Arc<dyn CommandLog>,
    /// Held from writing the commit message until `svn commit -F` exits
    commit_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for SvnExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvnExecutor")
            .field("program", &self.program)
            .field("diff_tool", &self.diff_tool)
            .field("temp_dir", &self.temp_dir)
            .finish_non_exhaustive()
    }
}

impl Default for SvnExecutor {
    fn default() -> Self {
        Self::new(
            constants::SVN_COMMAND,
            constants::DEFAULT_DIFF_TOOL,
            std::env::temp_dir().join("svnview"),
            Arc::new(TracingLog),
        )
    }
}

impl SvnExecutor {
    pub fn new(
        program: impl Into<String>,
        diff_tool: impl Into<String>,
        temp_dir: impl Into<PathBuf>,
        log: Arc<dyn CommandLog>,
    ) -> Self {
        Self {
            program: program.into(),
            diff_tool: diff_tool.into(),
            temp_dir: temp_dir.into(),
            log,
            commit_lock: Arc::default(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn diff_tool(&self) -> &str {
        &self.diff_tool
    }

    /// Path of the file `svn commit -F` reads the message from
    pub fn commit_message_path(&self) -> PathBuf {
        self.temp_dir.join(constants::COMMIT_MESSAGE_FILE)
    }

    /// Run a command to completion and return its stdout
    ///
    /// Returns an empty string when the process cannot be started. The exit
    /// status is not consulted; svn reports failures on stderr, which leaves
    /// stdout empty. One audit entry is recorded either way.
    pub fn run(&self, line: &CommandLine) -> String {
        let output = match Command::new(&line.program).args(&line.args).output() {
            Ok(output) => {
                if !output.stderr.is_empty() {
                    tracing::debug!(
                        command = %line,
                        stderr = %String::from_utf8_lossy(&output.stderr),
                        "svn wrote to stderr"
                    );
                }
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Err(e) => {
                tracing::warn!(command = %line, error = %e, "failed to start process");
                String::new()
            }
        };

        self.log.record(AuditEntry {
            command_line: line.to_string(),
            output: output.clone(),
        });
        output
    }

    /// Start a process without waiting for it
    ///
    /// The child gets null stdio so it cannot interfere with the terminal,
    /// and is never reaped by us.
    pub fn spawn_detached(&self, line: &CommandLine) -> std::io::Result<()> {
        let result = Command::new(&line.program)
            .args(&line.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        self.log.record(AuditEntry {
            command_line: line.to_string(),
            output: String::new(),
        });
        result.map(drop)
    }

    /// Serialize commits through the shared message file
    ///
    /// Every commit reuses the same file, so a second commit must not
    /// rewrite it before the first `svn commit -F` has read it.
    pub fn lock_commit(&self) -> MutexGuard<'_, ()> {
        self.commit_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write a commit message, one line at a time, replacing any previous one
    ///
    /// Callers hold [`SvnExecutor::lock_commit`] until the commit has run.
    pub fn write_commit_message(&self, message: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.temp_dir)?;
        let path = self.commit_message_path();
        write_lines(&path, message)?;
        Ok(path)
    }
}

fn write_lines(path: &Path, text: &str) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in text.lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
