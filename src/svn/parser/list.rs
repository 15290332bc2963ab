//! List output parser (svn list)

use super::super::SvnError;
use super::super::constants::markers::DIRECTORY_SUFFIX;
use crate::model::{ItemKind, ListEntry};

use super::Parser;

impl Parser {
    /// Parse `svn list` output into the immediate children of a node
    ///
    /// Directories are printed with a trailing `/`, which is stripped from
    /// the stored name.
    pub fn parse_list(output: &str) -> Result<Vec<ListEntry>, SvnError> {
        Self::require_output(output)?;

        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| match line.strip_suffix(DIRECTORY_SUFFIX) {
                Some(name) => ListEntry {
                    name: name.to_string(),
                    kind: ItemKind::Directory,
                },
                None => ListEntry {
                    name: line.to_string(),
                    kind: ItemKind::File,
                },
            })
            .collect())
    }
}
