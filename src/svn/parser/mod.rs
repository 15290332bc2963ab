//! svn output parser
//!
//! Parses the output from svn commands into structured data.

mod diff;
mod info;
mod list;
mod log;
mod status;


use regex::Regex;
use std::sync::LazyLock;

use super::SvnError;

/// Regex for the first line of an `svn log` entry
/// Format: `r<number> | <author> | <date> | <N> line(s)`
/// Example: `r42 | alice | 2024-01-01 10:00:00 +0000 (Mon, 01 Jan 2024) | 2 lines`
///
/// Groups:
/// 1. revision number
/// 2. author
/// 3. date (everything up to the last delimiter)
/// 4. number of message lines
static LOG_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r(\d+) \| (.*?) \| (.*) \| (\d+) lines?$").expect("Invalid log header regex")
});

/// Parser for svn command output
pub struct Parser;

impl Parser {
    /// Every parser rejects empty output: it is how a failed process looks
    fn require_output(output: &str) -> Result<(), SvnError> {
        if output.is_empty() {
            Err(SvnError::ParseError("empty output".to_string()))
        } else {
            Ok(())
        }
    }
}
