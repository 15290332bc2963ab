//! Diff summary parser (svn diff --summarize)

use super::super::SvnError;

use super::Parser;

impl Parser {
    /// Parse `svn diff -c <rev> --summarize` output
    ///
    /// Each non-empty line is kept verbatim as one affected item.
    pub fn parse_diff_summary(output: &str) -> Result<Vec<String>, SvnError> {
        Self::require_output(output)?;

        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
