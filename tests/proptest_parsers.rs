//! Property-based tests for svn output parsers
//!
//! Uses proptest to verify parsers handle arbitrary input without panicking,
//! and that well-formed output parses into exactly what was printed.

use proptest::prelude::*;
use svnview::model::ItemKind;
use svnview::svn::parser::Parser;

const DIVIDER: &str = "------------------------------------------------------------------------";

// =============================================================================
// Strategy generators for realistic-ish svn output
// =============================================================================

/// Generate an author name (no pipes)
fn author_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9._-]{0,15}".prop_map(|s| s.to_string())
}

/// Generate an svn-style date
fn date_strategy() -> impl Strategy<Value = String> {
    "[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2} \\+0000".prop_map(|s| s.to_string())
}

/// Generate one message line (anything but a line break)
fn message_line_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :_|-]{0,60}".prop_map(|s| s.to_string())
}

/// Generate a relative file path
fn file_path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_/. -]{0,50}".prop_map(|s| s.to_string())
}

/// One log entry: number, author, date, message lines
fn log_entry_strategy() -> impl Strategy<Value = (u64, String, String, Vec<String>)> {
    (
        1u64..1_000_000,
        author_strategy(),
        date_strategy(),
        prop::collection::vec(message_line_strategy(), 1..5),
    )
}

fn render_log(entries: &[(u64, String, String, Vec<String>)]) -> String {
    let mut out = String::new();
    for (number, author, date, message) in entries {
        let unit = if message.len() == 1 { "line" } else { "lines" };
        out.push_str(&format!(
            "{DIVIDER}\nr{number} | {author} | {date} | {} {unit}\n\n",
            message.len()
        ));
        for line in message {
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(DIVIDER);
    out.push('\n');
    out
}

// =============================================================================
// Robustness tests: parsers should never panic on arbitrary input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn log_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_log(&input);
    }

    #[test]
    fn status_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_status(&input);
    }

    #[test]
    fn info_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_info(&input);
    }

    #[test]
    fn list_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_list(&input);
    }

    #[test]
    fn diff_summary_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_diff_summary(&input);
    }
}

// =============================================================================
// Structured input tests: parsers handle well-formed input correctly
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// k well-formed blocks give exactly k revisions, in order
    #[test]
    fn log_parser_keeps_every_block(entries in prop::collection::vec(log_entry_strategy(), 0..8)) {
        let output = render_log(&entries);

        let revisions = Parser::parse_log(&output).unwrap();

        prop_assert_eq!(revisions.len(), entries.len());
        for (rev, (number, author, date, message)) in revisions.iter().zip(&entries) {
            prop_assert_eq!(rev.number, *number);
            prop_assert_eq!(&rev.author, author);
            prop_assert_eq!(&rev.date, date);
            prop_assert_eq!(&rev.description, &message.join("\n"));
            prop_assert!(rev.affected_items.is_empty());
        }
    }

    /// Cutting a block short fails the whole parse
    #[test]
    fn log_parser_rejects_truncated_block(entry in log_entry_strategy()) {
        let (number, author, date, message) = entry;
        let output = format!(
            "{DIVIDER}\nr{number} | {author} | {date} | {} lines\n\n{}\n",
            message.len() + 1,
            message.join("\n")
        );

        prop_assert!(Parser::parse_log(&output).is_err());
    }

    #[test]
    fn status_parser_handles_status_lines(
        lines in prop::collection::vec(
            (prop::sample::select(vec!['A', 'M', 'D', 'R', 'C', '?', '!']), file_path_strategy()),
            1..10,
        ),
    ) {
        let output: String = lines
            .iter()
            .map(|(status, path)| format!("{status}       {path}\n"))
            .collect();

        let changes = Parser::parse_status(&output).unwrap();

        prop_assert_eq!(changes.len(), lines.len());
        for (change, (status, path)) in changes.iter().zip(&lines) {
            prop_assert_eq!(&change.status, &status.to_string());
            prop_assert_eq!(&change.item, path);
        }
    }

    #[test]
    fn list_parser_detects_directories(
        names in prop::collection::vec(("[a-zA-Z0-9_.-]{1,20}", prop::bool::ANY), 1..10),
    ) {
        let output: String = names
            .iter()
            .map(|(name, is_dir)| if *is_dir { format!("{name}/\n") } else { format!("{name}\n") })
            .collect();

        let entries = Parser::parse_list(&output).unwrap();

        prop_assert_eq!(entries.len(), names.len());
        for (entry, (name, is_dir)) in entries.iter().zip(&names) {
            prop_assert_eq!(&entry.name, name);
            let expected = if *is_dir { ItemKind::Directory } else { ItemKind::File };
            prop_assert_eq!(entry.kind, expected);
        }
    }

    #[test]
    fn info_parser_reads_revision_and_url(
        revision in 0u64..10_000_000,
        url in "https://[a-z]{3,10}\\.org/[a-z/]{1,20}",
    ) {
        let output = format!("Path: .\nURL: {url}\nRevision: {revision}\nLast Changed Rev: {revision}\n");

        let info = Parser::parse_info(&output).unwrap();

        prop_assert_eq!(info.last_changed_rev, revision);
        prop_assert_eq!(info.url, url);
    }
}

// =============================================================================
// Edge case tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Header announcing far more lines than exist must not allocate or panic
    #[test]
    fn log_parser_handles_huge_line_counts(count in 1_000_000usize..usize::MAX) {
        let output = format!("r1 | a | d | {count} lines\n\nonly\n");
        prop_assert!(Parser::parse_log(&output).is_err());
    }

    #[test]
    fn log_parser_handles_unicode(s in "\\PC{1,100}") {
        let _ = Parser::parse_log(&s);
    }

    #[test]
    fn status_parser_handles_whitespace(
        spaces in " {0,10}",
        newlines in "\n{0,5}",
    ) {
        let input = format!("{}{}", spaces, newlines);
        let _ = Parser::parse_status(&input);
    }
}
