//! svn operations
//!
//! Each [`SvnCommand`] knows the exact invocation it produces and how to
//! turn the captured output into a typed [`CommandOutput`].

use std::fmt;

use super::SvnError;
use super::constants::{commands, flags};
use super::executor::SvnExecutor;
use super::parser::Parser;
use crate::model::{Change, ListEntry, RepoInfo, Revision};

/// A program and its arguments, displayed as one space-separated line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Type tag of a command, used to route its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Info,
    Log,
    Status,
    DiffSummary,
    List,
    Update,
    Add,
    Revert,
    Commit,
    LaunchExternalDiff,
}

impl CommandKind {
    pub fn tag(self) -> &'static str {
        match self {
            CommandKind::Info => "svn info",
            CommandKind::Log => "svn log",
            CommandKind::Status => "svn status",
            CommandKind::DiffSummary => "svn diff",
            CommandKind::List => "svn list",
            CommandKind::Update => "svn update",
            CommandKind::Add => "svn add",
            CommandKind::Revert => "svn revert",
            CommandKind::Commit => "svn commit",
            CommandKind::LaunchExternalDiff => "svn diff --diff-cmd",
        }
    }

    /// Does a successful run change the working copy?
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            CommandKind::Update | CommandKind::Add | CommandKind::Revert | CommandKind::Commit
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One svn operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvnCommand {
    Info {
        path: String,
    },
    Log {
        path: String,
        limit: u32,
    },
    Status {
        path: String,
    },
    DiffSummary {
        path: String,
        revision: u64,
    },
    List {
        full_path: String,
    },
    /// `revision: None` updates to HEAD
    Update {
        path: String,
        revision: Option<u64>,
    },
    Add {
        item: String,
    },
    Revert {
        item: String,
    },
    Commit {
        items: Vec<String>,
        message: String,
    },
    /// `revision: None` diffs the working copy against its base
    LaunchExternalDiff {
        path: String,
        revision: Option<u64>,
    },
}

/// Typed result of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Info(RepoInfo),
    Log(Vec<Revision>),
    Status(Vec<Change>),
    DiffSummary { revision: u64, items: Vec<String> },
    List { full_path: String, entries: Vec<ListEntry> },
    /// Mutating command finished
    Done,
    /// Detached process started
    Launched,
}

impl SvnCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            SvnCommand::Info { .. } => CommandKind::Info,
            SvnCommand::Log { .. } => CommandKind::Log,
            SvnCommand::Status { .. } => CommandKind::Status,
            SvnCommand::DiffSummary { .. } => CommandKind::DiffSummary,
            SvnCommand::List { .. } => CommandKind::List,
            SvnCommand::Update { .. } => CommandKind::Update,
            SvnCommand::Add { .. } => CommandKind::Add,
            SvnCommand::Revert { .. } => CommandKind::Revert,
            SvnCommand::Commit { .. } => CommandKind::Commit,
            SvnCommand::LaunchExternalDiff { .. } => CommandKind::LaunchExternalDiff,
        }
    }

    /// The exact invocation this command runs
    pub fn command_line(&self, executor: &SvnExecutor) -> CommandLine {
        let mut args: Vec<String> = Vec::new();
        match self {
            SvnCommand::Info { path } => {
                args.extend([commands::INFO.into(), path.clone()]);
            }
            SvnCommand::Log { path, limit } => {
                args.extend([
                    commands::LOG.into(),
                    path.clone(),
                    flags::LIMIT.into(),
                    limit.to_string(),
                ]);
            }
            SvnCommand::Status { path } => {
                args.extend([commands::STATUS.into(), path.clone()]);
            }
            SvnCommand::DiffSummary { path, revision } => {
                args.extend([
                    commands::DIFF.into(),
                    path.clone(),
                    flags::CHANGE.into(),
                    revision.to_string(),
                    flags::SUMMARIZE.into(),
                ]);
            }
            SvnCommand::List { full_path } => {
                args.extend([commands::LIST.into(), full_path.clone()]);
            }
            SvnCommand::Update { path, revision } => {
                args.extend([commands::UPDATE.into(), path.clone()]);
                if let Some(rev) = revision {
                    args.extend([flags::REVISION.into(), rev.to_string()]);
                }
                args.push(flags::NON_INTERACTIVE.into());
            }
            SvnCommand::Add { item } => {
                args.extend([
                    commands::ADD.into(),
                    item.clone(),
                    flags::NON_INTERACTIVE.into(),
                ]);
            }
            SvnCommand::Revert { item } => {
                args.extend([
                    commands::REVERT.into(),
                    item.clone(),
                    flags::NON_INTERACTIVE.into(),
                ]);
            }
            SvnCommand::Commit { items, .. } => {
                args.push(commands::COMMIT.into());
                args.extend(items.iter().cloned());
                args.extend([
                    flags::MESSAGE_FILE.into(),
                    executor.commit_message_path().display().to_string(),
                    flags::NON_INTERACTIVE.into(),
                ]);
            }
            SvnCommand::LaunchExternalDiff { path, revision } => {
                args.extend([
                    commands::DIFF.into(),
                    flags::DIFF_CMD.into(),
                    executor.diff_tool().to_string(),
                    path.clone(),
                ]);
                if let Some(rev) = revision {
                    args.extend([flags::CHANGE.into(), rev.to_string()]);
                }
            }
        }
        CommandLine::new(executor.program(), args)
    }

    /// Run the command and parse its output
    ///
    /// Blocks for the lifetime of the external process.
    pub fn execute(&self, executor: &SvnExecutor) -> Result<CommandOutput, SvnError> {
        let _commit = match self {
            SvnCommand::Commit { items, message } => {
                if items.is_empty() {
                    return Err(SvnError::InvalidInput("nothing selected to commit".into()));
                }
                if message.trim().is_empty() {
                    return Err(SvnError::InvalidInput("commit message is empty".into()));
                }
                let guard = executor.lock_commit();
                executor.write_commit_message(message)?;
                Some(guard)
            }
            _ => None,
        };

        let line = self.command_line(executor);

        if let SvnCommand::LaunchExternalDiff { .. } = self {
            executor.spawn_detached(&line)?;
            return Ok(CommandOutput::Launched);
        }

        let output = executor.run(&line);
        if output.is_empty() {
            return Err(SvnError::EmptyOutput {
                command: line.to_string(),
            });
        }

        match self {
            SvnCommand::Info { .. } => Parser::parse_info(&output).map(CommandOutput::Info),
            SvnCommand::Log { .. } => Parser::parse_log(&output).map(CommandOutput::Log),
            SvnCommand::Status { .. } => Parser::parse_status(&output).map(CommandOutput::Status),
            SvnCommand::DiffSummary { revision, .. } => {
                Parser::parse_diff_summary(&output).map(|items| CommandOutput::DiffSummary {
                    revision: *revision,
                    items,
                })
            }
            SvnCommand::List { full_path } => {
                Parser::parse_list(&output).map(|entries| CommandOutput::List {
                    full_path: full_path.clone(),
                    entries,
                })
            }
            SvnCommand::Update { .. }
            | SvnCommand::Add { .. }
            | SvnCommand::Revert { .. }
            | SvnCommand::Commit { .. } => Ok(CommandOutput::Done),
            SvnCommand::LaunchExternalDiff { .. } => Ok(CommandOutput::Launched),
        }
    }
}
