//! Info output parser (svn info)

use super::super::SvnError;
use super::super::constants::markers;
use crate::model::RepoInfo;

use super::Parser;

impl Parser {
    /// Parse `svn info` output
    ///
    /// Needs both the `Last Changed Rev: ` and the `URL: ` lines.
    pub fn parse_info(output: &str) -> Result<RepoInfo, SvnError> {
        Self::require_output(output)?;

        let mut last_changed_rev = None;
        let mut url = None;

        for line in output.lines() {
            if let Some(value) = line.strip_prefix(markers::LAST_CHANGED_REV) {
                let rev = value.trim().parse().map_err(|e| {
                    SvnError::ParseError(format!("Bad last changed revision {value:?}: {e}"))
                })?;
                last_changed_rev = Some(rev);
            } else if let Some(value) = line.strip_prefix(markers::URL) {
                url = Some(value.to_string());
            }
        }

        match (last_changed_rev, url) {
            (Some(last_changed_rev), Some(url)) => Ok(RepoInfo {
                last_changed_rev,
                url,
            }),
            (None, _) => Err(SvnError::ParseError(
                "svn info output has no Last Changed Rev".to_string(),
            )),
            (_, None) => Err(SvnError::ParseError("svn info output has no URL".to_string())),
        }
    }
}
