//! Status output parser (svn status)

use super::super::SvnError;
use crate::model::Change;

use super::Parser;

impl Parser {
    /// Parse `svn status` output
    ///
    /// One change per non-empty line, in output order.
    pub fn parse_status(output: &str) -> Result<Vec<Change>, SvnError> {
        Self::require_output(output)?;

        Ok(output.lines().filter_map(Self::parse_status_line).collect())
    }

    /// Parse a single status line
    ///
    /// The first character is the status code; the path follows after the
    /// remaining status columns, e.g. `M       src/a.txt`.
    pub(super) fn parse_status_line(line: &str) -> Option<Change> {
        let mut chars = line.chars();
        let status = chars.next()?;
        let item = chars.as_str().trim_start_matches(' ');

        Some(Change {
            status: status.to_string(),
            item: item.to_string(),
        })
    }
}
