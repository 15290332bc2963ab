//! Revision (changeset) data model

/// A revision from `svn log`, plus lazily fetched affected items
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Revision {
    /// Revision number
    pub number: u64,

    /// Author name, `(no author)` when svn has none
    pub author: String,

    /// Date string exactly as svn printed it
    pub date: String,

    /// Full log message, lines joined with `\n`
    pub description: String,

    /// Paths touched by this revision (empty until fetched)
    pub affected_items: Vec<String>,

    /// True while an affected-items fetch is outstanding
    pub loading: bool,
}

impl Revision {
    /// First line of the log message
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or("")
    }

    /// Get a display string for the description
    pub fn display_summary(&self) -> &str {
        match self.summary() {
            "" => "(no log message)",
            s => s,
        }
    }

    /// Case-insensitive match against number, author, date and message
    ///
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.number.to_string().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.date.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Result of `svn info`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoInfo {
    /// `Last Changed Rev`
    pub last_changed_rev: u64,
    /// Canonical repository URL
    pub url: String,
}

/// Keep the revisions matching `needle`, case-insensitively
///
/// An empty needle keeps everything.
pub fn filter_revisions<'a>(revisions: &'a [Revision], needle: &str) -> Vec<&'a Revision> {
    if needle.is_empty() {
        return revisions.iter().collect();
    }
    let needle = needle.to_lowercase();
    revisions
        .iter()
        .filter(|r| r.matches_lowercase(&needle))
        .collect()
}
