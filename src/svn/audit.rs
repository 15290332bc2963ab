//! Command audit log
//!
//! Every external invocation leaves exactly one entry here, holding the
//! command line and whatever the process printed.

use std::sync::{Arc, Mutex, PoisonError};

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// Command line as it was run
    pub command_line: String,
    /// Captured stdout (empty for detached processes and launch failures)
    pub output: String,
}

/// Sink for audit entries
pub trait CommandLog: Send + Sync {
    fn record(&self, entry: AuditEntry);
}

/// Keeps entries in memory, in invocation order
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Copy of all entries recorded so far
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CommandLog for MemoryLog {
    fn record(&self, entry: AuditEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

/// Forwards entries to `tracing` on the `svnview::audit` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl CommandLog for TracingLog {
    fn record(&self, entry: AuditEntry) {
        tracing::info!(
            target: "svnview::audit",
            command = %entry.command_line,
            bytes = entry.output.len(),
            "executed command\n{}",
            entry.output
        );
    }
}
