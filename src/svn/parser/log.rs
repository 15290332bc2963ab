//! Log output parser (svn log)

use super::super::SvnError;
use super::super::constants::markers::LOG_DIVIDER_CHAR;
use super::{LOG_HEADER_REGEX, Parser};
use crate::model::Revision;

impl Parser {
    /// Parse `svn log` output into revisions, in output order
    ///
    /// Entries are separated by divider lines. Each entry is a header, one
    /// blank line, and exactly as many message lines as the header
    /// announces. Any malformed entry fails the whole parse.
    pub fn parse_log(output: &str) -> Result<Vec<Revision>, SvnError> {
        Self::require_output(output)?;

        let mut revisions = Vec::new();
        let mut lines = output.lines();

        while let Some(line) = lines.next() {
            if line.is_empty() || Self::is_log_divider(line) {
                continue;
            }

            let (mut revision, line_count) = Self::parse_log_header(line)?;

            // Blank separator between header and message
            if lines.next().is_none() {
                return Err(Self::truncated(revision.number));
            }

            // svn announces 0 lines but still prints one empty message line
            let mut message = Vec::new();
            for _ in 0..line_count.max(1) {
                let text = lines.next().ok_or_else(|| Self::truncated(revision.number))?;
                message.push(text);
            }
            revision.description = message.join("\n");

            revisions.push(revision);
        }

        Ok(revisions)
    }

    /// Parse the header line of one log entry
    ///
    /// Returns the revision (without message) and the announced line count.
    pub(super) fn parse_log_header(line: &str) -> Result<(Revision, usize), SvnError> {
        let caps = LOG_HEADER_REGEX
            .captures(line)
            .ok_or_else(|| SvnError::ParseError(format!("Malformed log header: {line:?}")))?;

        let number = caps[1]
            .parse()
            .map_err(|e| SvnError::ParseError(format!("Bad revision number in {line:?}: {e}")))?;
        let line_count = caps[4]
            .parse()
            .map_err(|e| SvnError::ParseError(format!("Bad line count in {line:?}: {e}")))?;

        let revision = Revision {
            number,
            author: caps[2].to_string(),
            date: caps[3].to_string(),
            ..Default::default()
        };
        Ok((revision, line_count))
    }

    fn is_log_divider(line: &str) -> bool {
        line.chars().all(|c| c == LOG_DIVIDER_CHAR)
    }

    fn truncated(number: u64) -> SvnError {
        SvnError::ParseError(format!("Log entry r{number} ends before its message"))
    }
}
