//! Working-directory reconciliation between two commits.
//!
//! A migration projects `new`'s snapshot onto the working directory while
//! refusing to destroy work the repository does not know about. The
//! untracked-file check runs before any mutation; only then are
//! de-tracked files deleted and tracked files restored.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::error::{Error, Result};
use derive_new::new;

#[derive(new)]
pub struct Migration<'r> {
    workspace: &'r Workspace,
    database: &'r Database,
    old: &'r Commit,
    new: &'r Commit,
}

impl Migration<'_> {
    /// Refuse the transition when a working file untracked by `old` would
    /// be overwritten by `new`.
    pub fn check_untracked(&self) -> Result<()> {
        for filename in self.workspace.list_plain_files()? {
            if !self.old.tracks(&filename) && self.new.tracks(&filename) {
                return Err(Error::UntrackedWouldBeOverwritten);
            }
        }

        Ok(())
    }

    /// Project `new` onto the working directory.
    ///
    /// Files tracked by `old` but not by `new` are deleted; every file
    /// tracked by `new` is written out from its blob, overwriting any
    /// working copy.
    pub fn apply(&self) -> Result<()> {
        for filename in self.old.tracked_files() {
            if !self.new.tracks(filename) {
                self.workspace.remove_file(filename)?;
            }
        }

        for (filename, oid) in self.new.blobs() {
            let data = self.database.load_blob(oid)?;
            self.workspace.write_file(filename, &data)?;
        }

        Ok(())
    }
}
