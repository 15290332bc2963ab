//! Mutating operation integration tests.
//!
//! Update, add, revert and commit through a session, against the fake
//! svn script.

#![cfg(unix)]

#[path = "common/mod.rs"]
mod common;

use std::sync::Arc;

use common::{FakeSvn, count_invocations, wait_for, wait_idle};
use svnview::session::Session;
use svnview::svn::{MemoryLog, SvnError};

fn open(svn: &FakeSvn) -> (Session, Arc<MemoryLog>) {
    let log = MemoryLog::new();
    let (session, _events) = Session::new(&svn.config(), log.clone());
    session.open("/wc").expect("open should launch svn info");
    wait_idle(&session);
    (session, log)
}

#[test]
fn test_commit_with_empty_items_runs_nothing() {
    let svn = FakeSvn::with_repository();
    let (session, log) = open(&svn);
    let before = log.len();

    let result = session.commit(Vec::new(), "message");

    assert!(matches!(result, Err(SvnError::InvalidInput(_))));
    assert_eq!(log.len(), before);
    assert!(!svn.temp_dir().join("commit-message.txt").exists());
}

#[test]
fn test_commit_writes_message_and_refreshes() {
    let svn = FakeSvn::with_repository();
    let (session, log) = open(&svn);

    session
        .commit(vec!["src/a.txt".into()], "Fix a\nwith detail")
        .unwrap();
    wait_for("refresh after commit", || {
        count_invocations(&log, &["info /wc"]) == 2
    });
    wait_idle(&session);

    let message_file = svn.temp_dir().join("commit-message.txt");
    let message = std::fs::read_to_string(&message_file).unwrap();
    assert_eq!(message, "Fix a\nwith detail\n");

    let commit = format!(
        "commit src/a.txt -F {} --non-interactive",
        message_file.display()
    );
    assert_eq!(count_invocations(&log, &[&commit]), 1);
}

#[test]
fn test_commit_message_file_is_truncated() {
    let svn = FakeSvn::with_repository();
    let (session, _log) = open(&svn);

    session
        .commit(vec!["src/a.txt".into()], "a much longer first message")
        .unwrap();
    wait_idle(&session);
    session.commit(vec!["src/a.txt".into()], "short").unwrap();
    wait_idle(&session);

    let message = std::fs::read_to_string(svn.temp_dir().join("commit-message.txt")).unwrap();
    assert_eq!(message, "short\n");
}

#[test]
fn test_overlapping_commits_keep_their_messages() {
    let svn = FakeSvn::with_repository();
    let (session, _log) = open(&svn);
    svn.delay("commit", "0.3");

    session.commit(vec!["src/a.txt".into()], "first").unwrap();
    session.commit(vec!["src/b.txt".into()], "second").unwrap();
    wait_idle(&session);

    let mut seen: Vec<_> = svn.committed_messages().lines().map(String::from).collect();
    seen.sort();
    assert_eq!(seen, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_update_to_revision_refreshes() {
    let svn = FakeSvn::with_repository();
    let (session, log) = open(&svn);

    session.update_to_revision(1).unwrap();
    wait_for("refresh after update", || {
        count_invocations(&log, &["info /wc"]) == 2
    });
    wait_idle(&session);

    assert_eq!(
        count_invocations(&log, &["update /wc -r 1 --non-interactive"]),
        1
    );
}

#[test]
fn test_update_to_head() {
    let svn = FakeSvn::with_repository();
    let (session, log) = open(&svn);

    session.update_to_head().unwrap();
    wait_idle(&session);

    assert_eq!(count_invocations(&log, &["update /wc --non-interactive"]), 1);
    assert_eq!(count_invocations(&log, &["info /wc"]), 2);
}

#[test]
fn test_add_and_revert_refresh() {
    let svn = FakeSvn::with_repository();
    let (session, log) = open(&svn);

    session.add_to_source_control("notes.txt").unwrap();
    wait_idle(&session);
    session.revert("src/a.txt").unwrap();
    wait_idle(&session);

    assert_eq!(count_invocations(&log, &["add notes.txt --non-interactive"]), 1);
    assert_eq!(count_invocations(&log, &["revert src/a.txt --non-interactive"]), 1);
    assert_eq!(count_invocations(&log, &["info /wc"]), 3);
}

#[test]
fn test_failed_mutation_does_not_refresh() {
    let svn = FakeSvn::with_repository();
    svn.respond("revert", "");
    let (session, log) = open(&svn);

    session.revert("src/a.txt").unwrap();
    wait_idle(&session);

    assert_eq!(count_invocations(&log, &["info /wc"]), 1);
    assert!(session.errors()[0].starts_with("svn revert failed"));
}

#[test]
fn test_diff_viewer_is_detached() {
    let svn = FakeSvn::with_repository();
    let (session, log) = open(&svn);

    session.launch_diff_viewer("src/a.txt", Some(2)).unwrap();
    wait_idle(&session);

    assert_eq!(
        count_invocations(&log, &["diff --diff-cmd true src/a.txt -c 2"]),
        1
    );
    assert!(session.errors().is_empty());
}
