//! Status report rendering.
//!
//! The rendered form is a byte-exact contract: five headed sections, each
//! list sorted, each section followed by a single blank line. The active
//! branch carries a `*` prefix; unstaged changes carry a ` (modified)` or
//! ` (deleted)` tag.

use std::collections::BTreeMap;
use std::fmt;

/// Kind of an unstaged change.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ChangeKind {
    Modified,
    Deleted,
}

impl ChangeKind {
    fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub branches: Vec<String>,
    pub current_branch: String,
    pub staged: Vec<String>,
    pub removed: Vec<String>,
    pub unstaged: BTreeMap<String, ChangeKind>,
    pub untracked: Vec<String>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for branch in &self.branches {
            if branch == &self.current_branch {
                writeln!(f, "*{branch}")?;
            } else {
                writeln!(f, "{branch}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for filename in &self.staged {
            writeln!(f, "{filename}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for filename in &self.removed {
            writeln!(f, "{filename}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (filename, kind) in &self.unstaged {
            writeln!(f, "{filename} ({})", kind.as_str())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for filename in &self.untracked {
            writeln!(f, "{filename}")?;
        }
        writeln!(f)
    }
}
