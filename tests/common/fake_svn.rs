//! FakeSvn helper for integration tests.
//!
//! A shell script standing in for `svn`. It prints `<subcommand>.out`
//! from its directory, after sleeping for `<subcommand>.delay` seconds
//! when that file exists. `svn diff -c N --summarize` reads `diff.N.out`.
//! `svn commit -F <file>` appends the message it was given to `commit.seen`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

use svnview::config::Config;

const SCRIPT: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
cmd="$1"
if [ -f "$dir/$cmd.delay" ]; then
    sleep "$(cat "$dir/$cmd.delay")"
fi
if [ "$cmd" = "commit" ]; then
    prev=""
    for arg in "$@"; do
        [ "$prev" = "-F" ] && cat "$arg" >> "$dir/commit.seen"
        prev="$arg"
    done
fi
if [ "$cmd" = "diff" ] && [ "$3" = "-c" ]; then
    [ -f "$dir/diff.$4.out" ] && cat "$dir/diff.$4.out"
    exit 0
fi
if [ -f "$dir/$cmd.out" ]; then
    cat "$dir/$cmd.out"
fi
exit 0
"#;

/// A fake svn binary in a temporary directory.
///
/// Cleaned up when dropped.
pub struct FakeSvn {
    dir: TempDir,
}

impl FakeSvn {
    /// Create the script with no canned output at all.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let script = dir.path().join("svn");
        fs::write(&script, SCRIPT).expect("Failed to write fake svn");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake svn executable");
        Self { dir }
    }

    /// Create the script answering info, log, status and list.
    pub fn with_repository() -> Self {
        let svn = Self::new();
        svn.respond("info", super::INFO);
        svn.respond("log", super::LOG);
        svn.respond("status", super::STATUS);
        svn.respond("list", super::LIST);
        svn.respond("update", "Updating '.':\nAt revision 2.\n");
        svn.respond("add", "A         notes.txt\n");
        svn.respond("revert", "Reverted 'src/a.txt'\n");
        svn.respond("commit", "Sending        src/a.txt\nCommitted revision 3.\n");
        svn
    }

    pub fn program(&self) -> String {
        self.dir.path().join("svn").display().to_string()
    }

    /// Directory where the session writes its commit message.
    pub fn temp_dir(&self) -> PathBuf {
        self.dir.path().join("tmp")
    }

    /// Settings pointing a session at this script.
    pub fn config(&self) -> Config {
        Config {
            svn_command: self.program(),
            diff_tool: "true".to_string(),
            temp_dir: self.temp_dir(),
            ..Config::default()
        }
    }

    /// Set the output of `svn <subcommand>`; empty output removes it.
    pub fn respond(&self, subcommand: &str, output: &str) {
        let path = self.dir.path().join(format!("{subcommand}.out"));
        if output.is_empty() {
            let _ = fs::remove_file(path);
        } else {
            fs::write(path, output).expect("Failed to write canned output");
        }
    }

    /// Set the output of `svn diff <path> -c <revision> --summarize`.
    pub fn respond_diff(&self, revision: u64, output: &str) {
        let path = self.dir.path().join(format!("diff.{revision}.out"));
        fs::write(path, output).expect("Failed to write canned diff");
    }

    /// Every commit message `svn commit -F` has read, in order.
    pub fn committed_messages(&self) -> String {
        fs::read_to_string(self.dir.path().join("commit.seen")).unwrap_or_default()
    }

    /// Make `svn <subcommand>` sleep before answering.
    pub fn delay(&self, subcommand: &str, seconds: &str) {
        let path = self.dir.path().join(format!("{subcommand}.delay"));
        fs::write(path, seconds).expect("Failed to write delay");
    }
}
