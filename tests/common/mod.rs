//! Common test utilities for integration tests.
//!
//! Provides a fake `svn` executable whose answers are canned files in a
//! temporary directory, and helpers to wait on a running session.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file.

#![allow(dead_code)]

pub mod fake_svn;

pub use fake_svn::FakeSvn;

use std::time::{Duration, Instant};

use svnview::session::Session;
use svnview::svn::MemoryLog;

pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Poll `condition` until it holds, panicking after [`TIMEOUT`]
pub fn wait_for(what: &str, mut condition: impl FnMut() -> bool) {
    let start = Instant::now();
    while !condition() {
        if start.elapsed() > TIMEOUT {
            panic!("timed out waiting for {what}");
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// Wait until no command is in flight
pub fn wait_idle(session: &Session) {
    wait_for("session to go idle", || session.pending_count() == 0);
}

/// Number of audited invocations whose command line contains every needle
pub fn count_invocations(log: &MemoryLog, needles: &[&str]) -> usize {
    log.entries()
        .iter()
        .filter(|e| needles.iter().all(|n| e.command_line.contains(n)))
        .count()
}

pub const INFO: &str = "\
Path: .
Working Copy Root Path: /wc
URL: https://svn.example.org/repo/trunk
Relative URL: ^/trunk
Repository Root: https://svn.example.org/repo
Revision: 2
Node Kind: directory
Last Changed Author: bob
Last Changed Rev: 2
";

pub const LOG: &str = "\
------------------------------------------------------------------------
r2 | bob | 2024-01-02 10:00:00 +0000 (Tue, 02 Jan 2024) | 1 line

Second change
------------------------------------------------------------------------
r1 | alice | 2024-01-01 10:00:00 +0000 (Mon, 01 Jan 2024) | 2 lines

Fix bug
in parser
------------------------------------------------------------------------
";

pub const STATUS: &str = "\
M       src/a.txt
?       notes.txt
";

pub const LIST: &str = "\
src/
README.txt
";
