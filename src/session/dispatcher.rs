//! Background command dispatch
//!
//! Every command runs on its own worker thread. The dispatcher keeps a
//! registry of in-flight commands so shutdown can wait for all of them.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

use crate::svn::{SvnCommand, SvnError};

/// Identifier of one launched command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    tasks: HashMap<TaskId, SvnCommand>,
    closing: bool,
}

#[derive(Debug, Default)]
struct Inner {
    registry: Mutex<Registry>,
    drained: Condvar,
}

/// Runs work items on background threads and tracks them until they finish
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.inner
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Start `work` on a new thread, tracked under `command`
    ///
    /// The task is registered before the thread can possibly finish, and
    /// is removed from the registry when `work` returns or panics.
    /// Fails with [`SvnError::ShuttingDown`] once [`Dispatcher::shutdown`]
    /// has begun.
    pub fn launch<F>(&self, command: SvnCommand, work: F) -> Result<TaskId, SvnError>
    where
        F: FnOnce(TaskId) + Send + 'static,
    {
        let mut registry = self.registry();
        if registry.closing {
            return Err(SvnError::ShuttingDown);
        }

        let id = TaskId(registry.next_id);
        registry.next_id += 1;

        let kind = command.kind();
        let dispatcher = self.clone();
        thread::Builder::new()
            .name(format!("svnview-{}", kind.tag().replace(' ', "-")))
            .spawn(move || {
                let _guard = scopeguard::guard(dispatcher, move |d| d.finish(id));
                work(id);
            })?;

        tracing::debug!(task = id.0, command = %kind, "launched");
        registry.tasks.insert(id, command);
        Ok(id)
    }

    fn finish(&self, id: TaskId) {
        let mut registry = self.registry();
        if let Some(command) = registry.tasks.remove(&id) {
            tracing::debug!(task = id.0, command = %command.kind(), "finished");
        }
        if registry.tasks.is_empty() {
            self.inner.drained.notify_all();
        }
    }

    /// Refuse new work and block until every in-flight task has finished
    ///
    /// Must not be called from a worker thread.
    pub fn shutdown(&self) {
        let mut registry = self.registry();
        registry.closing = true;
        if !registry.tasks.is_empty() {
            tracing::info!(pending = registry.tasks.len(), "waiting for commands");
        }
        let _registry = self
            .inner
            .drained
            .wait_while(registry, |r| !r.tasks.is_empty())
            .unwrap_or_else(PoisonError::into_inner);
    }

    pub fn is_closing(&self) -> bool {
        self.registry().closing
    }

    /// Number of tasks still in flight
    pub fn pending_count(&self) -> usize {
        self.registry().tasks.len()
    }

    /// Commands still in flight, in launch order
    pub fn pending_commands(&self) -> Vec<SvnCommand> {
        let registry = self.registry();
        let mut tasks: Vec<_> = registry.tasks.iter().collect();
        tasks.sort_by_key(|(id, _)| **id);
        tasks.into_iter().map(|(_, command)| command.clone()).collect()
    }
}
